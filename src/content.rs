//! Static copy and data tables rendered by the page.

pub const OWNER_NAME: &str = "Amir Abdullah";

pub const HERO_INTRO: &str = "Web Developer with 1 year of experience building responsive, \
modern web apps using HTML, CSS, JavaScript, Tailwind CSS, React, Next.js, Node.js, Express, and Java.";

pub const AVAILABILITY: &str = "Open to work";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub info: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub desc: &'static str,
    pub stack: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry {
        name: "HTML",
        info: "Standard markup for web pages",
    },
    SkillEntry {
        name: "CSS",
        info: "Style sheet language",
    },
    SkillEntry {
        name: "JavaScript",
        info: "Programming language for the web",
    },
    SkillEntry {
        name: "Tailwind CSS",
        info: "Utility-first CSS framework",
    },
    SkillEntry {
        name: "React",
        info: "JavaScript library for building UI",
    },
    SkillEntry {
        name: "Next.js",
        info: "React framework with SSR support",
    },
    SkillEntry {
        name: "Node.js",
        info: "JavaScript runtime environment",
    },
    SkillEntry {
        name: "Express",
        info: "Web framework for Node.js",
    },
    SkillEntry {
        name: "Java",
        info: "Object-oriented programming language",
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "BA E-commerce Store",
        desc: "Fully Functional Responsive E-commerce Store with Product Management, Cart, Checkout, and Admin Product Management.",
        stack: &["Next.js", "Tailwind", "Stripe"],
        github: "https://github.com/Amir-Abdullah013/ba-sports-ecommerce-site/",
        demo: "https://ba-sports-ecommerce-site.vercel.app/",
    },
    ProjectEntry {
        title: "E\u{2011}commerce Store",
        desc: "Responsive storefront with product browsing, cart, checkout flow, and admin product management.",
        stack: &["Next.js", "Tailwind", "Stripe"],
        github: "https://github.com/Amir-Abdullah013/e-commerce-site",
        demo: "https://e-commerce-site-eta-two.vercel.app/",
    },
    ProjectEntry {
        title: "YouTube Clone",
        desc: "Video browsing, search, and watch pages with channel subscriptions and comments.",
        stack: &["Next.js", "YouTube API"],
        github: "https://github.com/Amir-Abdullah013/youtube-clone",
        demo: "https://youtube-clone-beryl-mu.vercel.app/",
    },
    ProjectEntry {
        title: "WhatsApp Clone",
        desc: "Real\u{2011}time chat rooms, typing indicators, and media sharing with authentication.",
        stack: &["React", "Firebase", "Tailwind"],
        github: "https://github.com/Amir-Abdullah013/whatsapp-clone-tailwind",
        demo: "https://whatsapp-clone-tailwind.vercel.app/",
    },
];

/// Label and value pairs for the "Quick facts" card.
pub const QUICK_FACTS: &[(&str, &str)] = &[
    ("Experience", "1 year"),
    ("Focus", "Front\u{2011}end & Full\u{2011}stack"),
    ("Looking for", "Internships / Junior roles"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}
