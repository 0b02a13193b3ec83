//! Static content rendered by the portfolio page.
//!
//! Everything here is `'static` data fixed at compile time. Sections render these
//! collections in declaration order.

use chrono::NaiveDate;

/// Icon shown next to a specialty badge. Maps onto the icon font classes in `input.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Brain,
    LineChart,
    Cpu,
    BarChart,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Brain => "extra-brain",
            Icon::LineChart => "extra-line-chart",
            Icon::Cpu => "extra-cpu",
            Icon::BarChart => "extra-bar-chart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub icon: Icon,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Personal site, empty when there is none.
    pub website: &'static str,
    pub resume_url: &'static str,
    pub years_experience: u8,
    pub specialties: &'static [Specialty],
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn website(&self) -> Option<&'static str> {
        (!self.website.is_empty()).then_some(self.website)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub provider: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    /// Path of the proof-of-completion document under `public/`.
    pub file: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub impact: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub title: &'static str,
    /// Month and year, e.g. "July 2025".
    pub date: &'static str,
    pub excerpt: &'static str,
}

impl Post {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("1 {}", self.date), "%d %B %Y").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_description: &'static str,
    pub twitter_description: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub image: &'static str,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: &'static str,
    pub locale: &'static str,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    title: "Banuso Hamzah Ademola | Data Science Portfolio",
    description: "Portfolio of Banuso Hamzah Ademola, Senior Data Scientist & AI/ML Engineer with 5+ years of experience, ML, DL, and MLOps certifications.",
    og_description: "Data Scientist & AI/ML Engineer with 5+ years of experience. Explore my projects, certifications, and impact.",
    twitter_description: "Turning complex data into actionable intelligence with AI, ML, and analytics.",
    url: "https://portfolio-hadex.vercel.app",
    site_name: "Banuso Hamzah Ademola",
    image: "/preview.png",
    image_width: 1200,
    image_height: 630,
    image_alt: "Banuso Hamzah Ademola Portfolio",
    locale: "en_US",
    og_type: "website",
    twitter_card: "summary_large_image",
};

pub const PROFILE: Profile = Profile {
    name: "Banuso Hamzah Ademola",
    title: "Senior Data Scientist | AI & ML Engineer",
    tagline: "Turning complex data into actionable intelligence that drives innovation and growth.",
    location: "Lagos, Nigeria",
    email: "you@example.com",
    github: "https://github.com/Hadex101",
    linkedin: "https://www.linkedin.com/in/hamzah-banuso-53916131a/",
    website: "",
    resume_url: "/CV.pdf",
    years_experience: 5,
    specialties: &[
        Specialty {
            icon: Icon::Brain,
            label: "Machine Learning",
        },
        Specialty {
            icon: Icon::LineChart,
            label: "Time Series",
        },
        Specialty {
            icon: Icon::Cpu,
            label: "MLOps & Deployment",
        },
        Specialty {
            icon: Icon::BarChart,
            label: "Analytics & BI",
        },
    ],
};

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        provider: "AltSchool Africa",
        title: "Data Science Certificate",
        year: "2024",
        file: "/altSchool.pdf",
    },
    Certificate {
        provider: "Edureka",
        title: "Machine Learning Certification",
        year: "2023",
        file: "/E1.pdf",
    },
    Certificate {
        provider: "Edureka",
        title: "Data Engineering with AWS",
        year: "2023",
        file: "/E2.pdf",
    },
    Certificate {
        provider: "Edureka",
        title: "Deep Learning with TensorFlow",
        year: "2022",
        file: "/E3.pdf",
    },
    Certificate {
        provider: "Edureka",
        title: "MLOps Essentials",
        year: "2022",
        file: "/E4.pdf",
    },
    Certificate {
        provider: "Edureka",
        title: "Python for Data Science",
        year: "2021",
        file: "/E5.pdf",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Revenue Forecasting",
        summary: "Built a hierarchical time series forecasting model (Prophet + LSTM) to predict multi-region sales with anomaly detection.",
        impact: "Reduced forecast error by 18% in simulated retail data.",
        tech: &["Python", "Prophet", "PyTorch", "Airflow", "Docker", "Streamlit"],
    },
    Project {
        title: "Customer Segmentation & Uplift Modeling",
        summary: "Developed RFM clustering combined with uplift modeling to optimize marketing campaigns.",
        impact: "Increased simulated campaign ROI by 27% and reduced churn by 9%.",
        tech: &["scikit-learn", "XGBoost", "SHAP", "FastAPI", "DVC"],
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    company: "Independent / Freelance",
    role: "Data Scientist & Consultant",
    period: "2019 — Present",
    bullets: &[
        "Designed and deployed predictive analytics and ML solutions.",
        "Delivered forecasting models that improved demand planning.",
        "Built dashboards and AI prototypes to demonstrate business impact.",
        "Completed certifications in Data Science, ML, DL, and MLOps.",
    ],
}];

pub const POSTS: &[Post] = &[Post {
    title: "Beyond Accuracy: Evaluating ML with Business KPIs",
    date: "July 2025",
    excerpt: "Why ROC-AUC isn’t enough and how to align models with revenue, cost, and risk.",
}];

pub fn build_year() -> i32 {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificates_keep_declaration_order() {
        let files = CERTIFICATES.iter().map(|c| c.file).collect::<Vec<_>>();
        assert_eq!(
            files,
            vec![
                "/altSchool.pdf",
                "/E1.pdf",
                "/E2.pdf",
                "/E3.pdf",
                "/E4.pdf",
                "/E5.pdf"
            ]
        );
    }

    #[test]
    fn test_certificate_files_are_non_empty() {
        for cert in CERTIFICATES {
            assert!(!cert.file.is_empty(), "{} has no file", cert.title);
            assert!(!cert.title.is_empty());
        }
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:you@example.com");
        // empty website is not rendered
        assert_eq!(PROFILE.website(), None);
        let with_site = Profile {
            website: "https://example.com",
            ..PROFILE
        };
        assert_eq!(with_site.website(), Some("https://example.com"));
    }

    #[test]
    fn test_post_published_date() {
        let post = POSTS[0];
        assert_eq!(post.published(), NaiveDate::from_ymd_opt(2025, 7, 1));

        let bad = Post {
            date: "sometime",
            ..post
        };
        assert_eq!(bad.published(), None);
    }

    #[test]
    fn test_build_year_is_stamped() {
        assert!(build_year() >= 2025);
    }
}
