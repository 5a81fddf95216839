use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{
    ContactClient, ContactField, ContactForm, ContactTransport, STATUS_CLEAR_DELAY,
};
use crate::portfolio::{CONTACT_BLURB, PROFILE};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200";

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let clear_timer = StoredValue::new(None::<TimeoutHandle>);

    let value_of = move |field: ContactField| move || form.with(|f| f.field(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        clear_timer.update_value(|t| {
            if let Some(t) = t.take() {
                t.clear();
            }
        });
        let snapshot = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(snapshot)) => snapshot,
            Some(Err(errs)) => {
                log::warn!("contact form blocked: {errs}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let client = ContactClient::from_build_env();
            let outcome = client.send(&snapshot).await;
            let Some(ticket) = form.try_update(|f| f.finish_submit(outcome)) else {
                return;
            };
            match set_timeout_with_handle(
                move || {
                    form.try_update(|f| f.clear_status(ticket));
                },
                STATUS_CLEAR_DELAY,
            ) {
                Ok(handle) => clear_timer.set_value(Some(handle)),
                Err(e) => log::warn!("couldn't arm status timer: {e:?}"),
            }
        });
    };

    view! {
        <section id="contact" class="section-content mb-12">
            <h2 class="text-2xl font-bold my-8 border-b border-muted/30 pb-2">"Get In Touch"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="space-y-4">
                    <h3 class="text-xl font-bold text-cyan">"Let's Connect"</h3>
                    <p class="leading-relaxed">{CONTACT_BLURB}</p>
                    <div class="space-y-2 text-sm">
                        <div>"📧 " {PROFILE.email}</div>
                        <div>"📱 " {PROFILE.phone}</div>
                        <div>"📍 " {PROFILE.location}</div>
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue hover:text-brightBlue"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href=PROFILE.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-brightWhite"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>
                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <input
                        type="text"
                        name=ContactField::Name.as_str()
                        placeholder="Your Name"
                        required
                        class=INPUT_CLASS
                        prop:value=value_of(ContactField::Name)
                        on:input=move |ev| {
                            form.update(|f| f.set_field(ContactField::Name, event_target_value(&ev)))
                        }
                    />
                    <input
                        type="email"
                        name=ContactField::Email.as_str()
                        placeholder="Your Email"
                        required
                        class=INPUT_CLASS
                        prop:value=value_of(ContactField::Email)
                        on:input=move |ev| {
                            form.update(|f| f.set_field(ContactField::Email, event_target_value(&ev)))
                        }
                    />
                    <textarea
                        name=ContactField::Message.as_str()
                        placeholder="Your Message"
                        rows="5"
                        required
                        class=INPUT_CLASS
                        prop:value=value_of(ContactField::Message)
                        on:input=move |ev| {
                            form.update(|f| {
                                f.set_field(ContactField::Message, event_target_value(&ev))
                            })
                        }
                    ></textarea>
                    <button
                        type="submit"
                        class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200"
                    >
                        "Send Message"
                    </button>
                    {move || {
                        let status = form.with(|f| f.status());
                        let color = if status.is_err() { "text-red-500" } else { "text-green-500" };
                        status.message().map(|msg| view! { <p class=color>{msg}</p> })
                    }}
                </form>
            </div>
        </section>
    }
}
