pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub objective: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Education {
    pub years: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub branch: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Experience {
    pub year: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Project {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

pub static PROFILE: Profile = Profile {
    name: "DHANYASHREE M V",
    initials: "DM",
    title: "AI/ML Engineering Student",
    tagline: "Building intelligent, user-focused solutions through code and creativity",
    objective: "Enthusiastic AI/ML engineering student exploring roles in software development and AI, driven to build intelligent, user-focused solutions through code and creativity. Passionate about leveraging technology to solve real-world problems and make a positive impact.",
    email: "dhanyashreem@gmail.com",
    phone: "+91 8860769397",
    location: "Bengaluru, Karnataka",
    linkedin: "https://www.linkedin.com/in/dhanyashree-mv-27d/",
    github: "https://github.com/DHANYASHREE-MV",
};

pub static HERO_STATS: &[Stat] = &[
    Stat {
        value: "4+",
        label: "Projects",
    },
    Stat {
        value: "6+",
        label: "Technologies",
    },
    Stat {
        value: "2",
        label: "Leadership Roles",
    },
];

pub static ABOUT_HIGHLIGHTS: &[Stat] = &[
    Stat {
        value: "4+",
        label: "Major Projects",
    },
    Stat {
        value: "2",
        label: "Leadership Roles",
    },
    Stat {
        value: "6+",
        label: "Technologies",
    },
];

pub static ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1717501218385-55bc3a95be94?crop=entropy&cs=srgb&fm=jpg&q=85";

pub static EDUCATION: &[Education] = &[
    Education {
        years: "2022 - 2026",
        degree: "Bachelor of Engineering",
        institution: "Dayananda Sagar College Of Engineering",
        branch: "Artificial Intelligence and Machine Learning",
    },
    Education {
        years: "2020 - 2022",
        degree: "Pre-University Course",
        institution: "MES PU College",
        branch: "Science PCMB",
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Technical Skills",
        skills: &[
            "NumPy",
            "Pandas",
            "PyTorch",
            "TensorFlow",
            "Keras",
            "Sklearn",
            "Docker",
            "Matlab",
            "Tableau",
        ],
    },
    SkillGroup {
        title: "Programming Languages",
        skills: &["Python", "R", "C", "JavaScript", "HTML", "CSS"],
    },
    SkillGroup {
        title: "Soft Skills",
        skills: &[
            "Problem Solving",
            "Teamwork",
            "Adaptability",
            "Time Management",
            "Communication",
        ],
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        year: "2025",
        title: "Co-Lead Content Team",
        organization: "The Central Committee - DSCE",
        highlights: &[
            "Spearheaded content strategy and editorial management for consistent, impactful messaging",
            "Coordinated team efforts to deliver high-quality communications aligned with organizational goals",
        ],
    },
    Experience {
        year: "2023",
        title: "Event Management Volunteer",
        organization: "E-Summit - IEDC",
        highlights: &[
            "Assisted in planning and coordinating event activities for seamless execution",
            "Supported participant engagement to enhance overall event experience",
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        name: "PURE FLOW",
        subtitle: "IoT-Based Water Quality Monitoring System",
        description: "Designed and implemented an Arduino ESP32 system equipped with multiple sensors to perform real-time water quality monitoring, capturing parameters like pH, turbidity, and temperature. Integrated cloud connectivity and IoT visualization by linking the system to the Blynk platform, enabling remote data access, live monitoring, and real-time alerts.",
        image: Some("https://images.pexels.com/photos/8728386/pexels-photo-8728386.jpeg"),
    },
    Project {
        name: "DIAGNO-GENIE",
        subtitle: "Machine Learning Multiple Disease Prediction System",
        description: "Built a web-based Multiple Disease Prediction System using machine learning to predict Diabetes, Heart Disease, and Parkinson's Disease from user input. Developed ML pipelines for training and evaluation, with integrated experiment tracking and artifact logging via MLflow. The application features an interactive Streamlit interface, automated model reporting, and Docker-based deployment for portability.",
        image: None,
    },
    Project {
        name: "WILD GUARD AI",
        subtitle: "Deep Learning + Computer Vision",
        description: "Developed a real-time wildlife monitoring system using YOLOv11 for detecting poachers, rangers, and tourists from camera images. Integrated a Streamlit-based frontend to support real-time image uploads and display detection results in an interactive, scrollable layout. Implemented automated SMS alerts via Twilio API to notify authorities instantly when poachers are detected.",
        image: None,
    },
    Project {
        name: "OZONE LEVEL FORECASTING",
        subtitle: "Air Quality Visualization System",
        description: "Developed a deep learning-based ozone forecasting system using LSTM models to predict monthly ozone levels from 2024 to 2027 across seven major locations in Bangalore, aimed at improving air quality insights and supporting public health awareness initiatives. The project leveraged Python, TensorFlow, Keras, Pandas, NumPy, Matplotlib, Seaborn, and Streamlit, with all data processed from structured CSV files for multi-location forecasting.",
        image: None,
    },
];

pub static LEADERSHIP: &str = "Co-led the content team, overseeing strategy, creation, and quality control across multiple platforms. Collaborated with cross-functional teams to ensure consistent, engaging, and impactful communication.";

pub static ACTIVITIES: &[&str] = &[
    "Blog Writing",
    "Coding",
    "Developing",
    "Dancing",
    "Binge-watching",
];

pub static CONTACT_BLURB: &str = "I'm always open to discussing new opportunities, collaborations, or just having a conversation about technology and AI.";
