//! Static portfolio content

/// Destination for contact form messages
pub const CONTACT_EMAIL: &str = "htharinduherath@gmail.com";
pub const CONTACT_PHONE: &str = "+94 778 378 446";
pub const CONTACT_LOCATION: &str = "Werellagama, Kandy";

pub const OWNER_NAME: &str = "Tharindu Herath";
pub const OWNER_TITLE: &str = "Full-Stack Developer";
pub const TAGLINE: &str = "Passionate about creating innovative and scalable solutions that bring ideas to life through clean, efficient code.";
pub const AVAILABILITY: &str = "Available for new opportunities";
pub const FOOTER: &str = "© 2024 Tharindu Herath. Crafted with passion and precision.";

pub const GITHUB_URL: &str = "https://github.com/TharinduDananjaya";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/tharindudhananjayaherath";

pub const ABOUT_HEADLINE: &str = "Passionate Developer & Problem Solver";
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a passionate and adaptable full-stack developer with hands-on experience in React, Laravel, Node.js, and TypeScript. I enjoy working in collaborative environments and solving real-world problems through clean, scalable code.",
    "I believe in continuous learning and embracing new technologies to deliver exceptional digital experiences that make a meaningful impact.",
];

/// Headline figure on the About section
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "6+", label: "Projects Completed" },
    Stat { value: "2+", label: "Years Experience" },
    Stat { value: "10+", label: "Technologies" },
    Stat { value: "100%", label: "Dedication" },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &["C", "Java", "PHP", "JavaScript", "TypeScript", "Python"],
    },
    SkillCategory {
        title: "Frontend",
        skills: &["HTML5", "React", "Angular", "Tailwind CSS", "Bootstrap", "InertiaJS", "Vite"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Laravel", "Node.js", "Spring Boot"],
    },
    SkillCategory {
        title: "Databases",
        skills: &["MySQL", "MongoDB", "Firebase"],
    },
    SkillCategory {
        title: "QA Tools",
        skills: &["Playwright", "Cucumber", "JUnit"],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &["Git", "Clever", "Jira", "Trello", "GitHub Projects", "VS Code", "IntelliJ"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Full Stack Developer Intern",
    company: "Axcertro",
    period: "April 2024 – October 2024",
    highlights: &[
        "Worked on Link Skill platform and several web applications",
        "Developed proposal system with comprehensive workflow management",
        "Implemented billing system with OTP verification and OnePay integration",
        "Built admin dashboards with real-time data visualization",
        "Developed real-time broadcasting features for enhanced user engagement",
    ],
}];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Venomous Snake Identifier",
        description: "AI-based image classification & chatbot for safety guidelines using NLP, machine learning, and emergency response features.",
        tech: &["AI/ML", "NLP", "Image Classification"],
    },
    Project {
        title: "Medical Prescription Management System",
        description: "Complete prescription management system with email notifications and pharmacy quotation system.",
        tech: &["Laravel", "React", "Email Integration"],
    },
    Project {
        title: "ZoneED - School Management System",
        description: "Multi-role platform for educational institutions with comprehensive management features.",
        tech: &["Angular", "Spring Boot", "Firebase"],
    },
    Project {
        title: "Wedagedara Products",
        description: "Herbal e-commerce platform with OnePay integration, shipping logic, and comprehensive admin tools.",
        tech: &["E-commerce", "Payment Integration", "Admin Dashboard"],
    },
    Project {
        title: "MF Mart",
        description: "Grocery store application with OTP verification, COD, Excel import/export, and Notify.lk integration.",
        tech: &["React", "Laravel", "Payment Gateway"],
    },
    Project {
        title: "Learnhub LMS",
        description: "Learning Management System with separate student and teacher modules for online education.",
        tech: &["React", "Laravel", "LMS"],
    },
];
