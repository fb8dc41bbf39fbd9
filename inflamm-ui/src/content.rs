//! Static copy for the landing page sections

pub const BRAND: &str = "Inflamm AI";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Pathway {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Hero {
    pub headline: [&'static str; 2],
    pub tagline: &'static str,
}

pub struct CallToAction {
    pub heading: [&'static str; 2],
    pub body: &'static str,
    pub button: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Community",
        href: "https://t.me/InflammAI",
    },
    NavLink {
        label: "Blog",
        href: "https://medium.com/@InflammAI/inflammation-the-underdog-killer-disease-d3f27a12aa48",
    },
    NavLink {
        label: "Read the Whitepaper",
        href: "/Whitepaper.pdf",
    },
    NavLink {
        label: "Try the Demo",
        href: "/demo",
    },
];

pub const HERO: Hero = Hero {
    headline: ["Trustless Health,", "Boundless Memory"],
    tagline: "Every heartbeat, every neuron, creates value. In our system, that value belongs only to you. Encrypted Health. Infinite Recall.",
};

pub const WHAT_IS_KICKER: &str = "Secure, self-sovereign memory for intelligent health";
pub const WHAT_IS_HEADING: &str = "What Makes Inflamm AI Trustless";
pub const WHAT_IS_BODY: &str = "We're building the trustless layer where your health lives with you. A programmable health infrastructure built on blockchain and AI. Secure, interoperable, and user-owned.";

pub static FEATURES: [Feature; 5] = [
    Feature {
        title: "🔒 Trustless and Self-Custodial",
        description: "Self-custodied data, verifiable and user-governed",
    },
    Feature {
        title: "⚕️ AI-Optimized Health Record",
        description: "Optimized for Smart Health Applications",
    },
    Feature {
        title: "💰 Earn From Your Data",
        description: "Turn your health data into value for you",
    },
    Feature {
        title: "🛡️ Privacy & Compliance",
        description: "Circular Data Certification Security And Privacy Protection",
    },
    Feature {
        title: "🤖 Agent-To-Agent Payment",
        description: "Secure, instant transactions between AI agents",
    },
];

pub static CORE_FEATURES: [Feature; 3] = [
    Feature {
        title: "On-Chain Data Rewards",
        description: "Power health innovation with your anonymized data and share in the value",
    },
    Feature {
        title: "Plug-and-Play API",
        description: "For developers building trustless health intelligence",
    },
    Feature {
        title: "Compliant & Connected",
        description: "Circular Data Compliance Architecture",
    },
];

pub static PATHWAYS_HEADING: [&str; 2] = [
    "One Trustless Layer, Endless Pathways",
    "Many Agents, One Trustless Health Layer",
];

pub static PATHWAYS: [Pathway; 4] = [
    Pathway {
        icon: "👤",
        title: "For Web3 Users",
        description: "Not Your Data? Not Your Health. Monetize Your Memory On Your Terms",
    },
    Pathway {
        icon: "🏥",
        title: "For Healthcare Providers",
        description: "Access structured, patient-owned health data with built-in consent",
    },
    Pathway {
        icon: "💼",
        title: "For Investors",
        description: "We're building a new data economy powered by health intelligence",
    },
    Pathway {
        icon: "💻",
        title: "For Developers",
        description: "Build the next generation of health apps on trustless infrastructure",
    },
];

pub const CTA: CallToAction = CallToAction {
    heading: [
        "Deploy, Earn, Or Align",
        "Step Into The Decentralized Health Frontier",
    ],
    body: "We're creating the open infrastructure for self-owned health data. Secure, interoperable, and intelligence-ready. Powered by blockchain, enhanced by AI, and governed by you.",
    button: "Start Now",
    href: "https://forms.gle/jHaGvRq4xDpbxWEb8",
};

pub const FOOTER_BLURB: &str =
    "Inflamm AI unlocks trustless ownership of health memory in an intelligent world";

pub static SOCIAL_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Telegram",
        href: "https://t.me/InflammAI",
    },
    NavLink {
        label: "Twitter",
        href: "https://x.com/InflamAI",
    },
];

pub static FOOTER_LEGAL: [&str; 2] = ["Privacy Policy", "Terms of Service"];

pub const COPYRIGHT: &str = "© 2025 Inflamm AI. All rights reserved";
