/// A listing in the fixed startup catalog.
#[derive(Debug, Clone, Copy)]
pub struct SeedListing {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub tags: &'static str,
    pub stipend: &'static str,
    pub url: &'static str,
}

const fn seed(
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    tags: &'static str,
    stipend: &'static str,
    url: &'static str,
) -> SeedListing {
    SeedListing {
        title,
        company,
        location,
        description,
        tags,
        stipend,
        url,
    }
}

pub const SEED_LISTINGS: &[SeedListing] = &[
    seed(
        "Backend Developer Intern",
        "Acme Corp",
        "Bengaluru",
        "Work on Python APIs and microservices",
        "python flask api sql backend",
        "15000",
        "https://example.com/a",
    ),
    seed(
        "Java Developer Intern",
        "TechVerse",
        "Hyderabad",
        "Assist in building enterprise Java applications",
        "java spring hibernate backend",
        "12000",
        "https://example.com/b",
    ),
    seed(
        "Node.js Intern",
        "CodeWorks",
        "Remote",
        "Develop backend services in Node.js and Express",
        "nodejs express mongodb backend",
        "14000",
        "https://example.com/c",
    ),
    seed(
        "Frontend Intern",
        "Pixel Labs",
        "Pune",
        "React + Tailwind UI work",
        "javascript react css tailwind frontend",
        "12000",
        "https://example.com/d",
    ),
    seed(
        "Web Designer Intern",
        "DesignHub",
        "Delhi",
        "HTML, CSS, and Figma prototyping",
        "html css figma uiux design",
        "8000",
        "https://example.com/e",
    ),
    seed(
        "Fullstack Developer Intern",
        "NextWeb",
        "Remote",
        "End-to-end MERN stack development",
        "mongodb express react node fullstack",
        "18000",
        "https://example.com/f",
    ),
    seed(
        "Data Science Intern",
        "DataWorks",
        "Hyderabad",
        "NLP and model prototyping",
        "python pandas sklearn nlp",
        "20000",
        "https://example.com/g",
    ),
    seed(
        "Machine Learning Intern",
        "AI Labs",
        "Bengaluru",
        "Work on supervised learning models",
        "python tensorflow pytorch ml ai",
        "22000",
        "https://example.com/h",
    ),
    seed(
        "Business Analyst Intern",
        "Insight Corp",
        "Mumbai",
        "Data analysis & visualization for clients",
        "excel sql tableau powerbi analytics",
        "10000",
        "https://example.com/i",
    ),
    seed(
        "Computer Vision Intern",
        "VisionTech",
        "Chennai",
        "Image recognition and deep learning models",
        "opencv pytorch cnn vision",
        "20000",
        "https://example.com/j",
    ),
    seed(
        "Cloud DevOps Intern",
        "CloudWorks",
        "Remote",
        "CI/CD and infra automations",
        "aws docker terraform cicd devops",
        "22000",
        "https://example.com/k",
    ),
    seed(
        "Azure Intern",
        "SoftTech",
        "Noida",
        "Work on Microsoft Azure cloud services",
        "azure cloud networking devops",
        "18000",
        "https://example.com/l",
    ),
    seed(
        "Kubernetes Intern",
        "InfraTech",
        "Gurgaon",
        "Manage Kubernetes clusters",
        "kubernetes docker helm devops cloud",
        "21000",
        "https://example.com/m",
    ),
    seed(
        "Embedded Systems Intern",
        "IoT Solutions",
        "Chennai",
        "C/C++ on microcontrollers",
        "c cpp embedded iot microcontroller",
        "18000",
        "https://example.com/n",
    ),
    seed(
        "Robotics Intern",
        "RoboCorp",
        "Pune",
        "Assist in building robotic arms",
        "robotics arduino ros python",
        "16000",
        "https://example.com/o",
    ),
    seed(
        "IoT Firmware Intern",
        "SmartHome Inc.",
        "Bengaluru",
        "Firmware for IoT devices",
        "iot firmware embedded c esp32",
        "17000",
        "https://example.com/p",
    ),
    seed(
        "Cybersecurity Intern",
        "SecureNet",
        "Delhi",
        "Help perform penetration testing",
        "cybersecurity linux networking ethical-hacking",
        "19000",
        "https://example.com/q",
    ),
    seed(
        "SOC Analyst Intern",
        "DefendTech",
        "Hyderabad",
        "Work in a Security Operations Center",
        "security monitoring siem soc",
        "15000",
        "https://example.com/r",
    ),
    seed(
        "Product Management Intern",
        "NextGen",
        "Mumbai",
        "Assist PMs on market research",
        "product management communication research",
        "10000",
        "https://example.com/s",
    ),
    seed(
        "Digital Marketing Intern",
        "AdWorks",
        "Remote",
        "SEO, Google Ads, and content marketing",
        "seo google-ads marketing content",
        "8000",
        "https://example.com/t",
    ),
    seed(
        "Operations Intern",
        "BizOps",
        "Delhi",
        "Support business operations",
        "operations management ms-excel",
        "7000",
        "https://example.com/u",
    ),
    seed(
        "Graphic Design Intern",
        "Creative Labs",
        "Pune",
        "Adobe Photoshop & Illustrator work",
        "photoshop illustrator graphics design",
        "6000",
        "https://example.com/v",
    ),
    seed(
        "UI/UX Intern",
        "DesignStudio",
        "Remote",
        "Wireframing and prototyping in Figma",
        "uiux figma sketch design",
        "10000",
        "https://example.com/w",
    ),
    seed(
        "Content Writer Intern",
        "WordWorks",
        "Remote",
        "Write blogs and social media content",
        "writing editing content marketing",
        "5000",
        "https://example.com/x",
    ),
    seed(
        "HR Intern",
        "PeopleFirst",
        "Bengaluru",
        "Assist HR with recruitment",
        "hr recruitment communication",
        "6000",
        "https://example.com/y",
    ),
    seed(
        "Finance Intern",
        "MoneyMatters",
        "Mumbai",
        "Financial modeling and Excel reporting",
        "finance accounting excel",
        "12000",
        "https://example.com/z",
    ),
    seed(
        "Legal Intern",
        "LawTech",
        "Delhi",
        "Research corporate law cases",
        "law contracts compliance legal",
        "8000",
        "https://example.com/aa",
    ),
    seed(
        "Sales Intern",
        "GrowthCorp",
        "Gurgaon",
        "Client outreach and sales support",
        "sales communication crm",
        "7000",
        "https://example.com/ab",
    ),
    seed(
        "Game Development Intern",
        "GameVerse",
        "Remote",
        "Unity/C# game development",
        "unity csharp game-development",
        "15000",
        "https://example.com/ac",
    ),
];
