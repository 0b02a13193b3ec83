use leptos::prelude::*;

use super::modal::CertificateModal;
use super::widgets::{Badge, Card, SectionTitle, CONTAINER};
use crate::content::{
    build_year, Certificate, ExperienceEntry, Post, Profile, Project, CERTIFICATES, EXPERIENCE,
    POSTS, PROFILE, PROJECTS,
};
use crate::overlay::Overlay;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let overlay = RwSignal::new(Overlay::default());
    let view_certificate = certificate_opener(overlay);

    view! {
        <div class="min-h-screen text-white bg-[#0b1020] relative">
            <Nav />
            <Hero profile=PROFILE />
            <ProjectsSection projects=PROJECTS />
            <ExperienceSection entries=EXPERIENCE />
            <CertificatesSection certificates=CERTIFICATES on_view=view_certificate />
            <PostsSection posts=POSTS />
            <Footer profile=PROFILE />
            <CertificateModal overlay />
        </div>
    }
}

/// Handler behind each "View Certificate" button.
fn certificate_opener(overlay: RwSignal<Overlay>) -> Callback<Certificate> {
    Callback::new(move |cert: Certificate| overlay.update(|o| o.open_certificate(&cert)))
}

#[component]
fn Nav() -> impl IntoView {
    let links = [
        ("#projects", "Projects"),
        ("#experience", "Experience"),
        ("#certs", "Certifications"),
        ("#blog", "Writing"),
    ];
    view! {
        <nav class=format!("{CONTAINER} pt-6 flex justify-end gap-6 text-sm text-white/70")>
            {links
                .into_iter()
                .map(|(href, label)| {
                    view! {
                        <a href=href class="hover:text-white">
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn Hero(profile: Profile) -> impl IntoView {
    view! {
        <section class=format!("{CONTAINER} pt-16 md:pt-28 pb-12")>
            <h1 class="text-4xl font-bold">{profile.name}</h1>
            <h2 class="text-xl text-white/80 mt-2">{profile.title}</h2>
            <p class="mt-4 text-white/70">{profile.tagline}</p>
            <p class="mt-2 text-sm text-white/60">
                <i class="extra-location" />
                " "
                {profile.location}
                " · "
                {format!("{}+ years of experience", profile.years_experience)}
            </p>
            <div class="mt-6 flex flex-wrap gap-2">
                {profile
                    .specialties
                    .iter()
                    .map(|s| {
                        view! {
                            <Badge>
                                <i class=s.icon.class() />
                                " "
                                {s.label}
                            </Badge>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8 flex flex-wrap items-center gap-4">
                <a
                    href=profile.resume_url
                    download=""
                    class="px-4 py-2 rounded-xl bg-cyan-400/20 border border-cyan-400/30 text-cyan-400 hover:bg-cyan-400/30"
                >
                    "Download CV"
                </a>
                <a href=profile.mailto() class="text-white/70 hover:text-white">
                    "Get in touch"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class=format!("{CONTAINER} py-12 md:py-20")>
            <SectionTitle text="Featured Projects" />
            <div class="grid md:grid-cols-2 gap-6">
                {projects
                    .iter()
                    .map(|p| {
                        view! {
                            <Card class="project-card">
                                <h3 class="text-lg font-semibold">{p.title}</h3>
                                <p class="mt-2 text-sm text-white/80">{p.summary}</p>
                                <p class="mt-2 text-sm text-white/70">
                                    <span class="opacity-70">"Impact:"</span>
                                    " "
                                    {p.impact}
                                </p>
                                <div class="mt-3 flex flex-wrap gap-2">
                                    {p
                                        .tech
                                        .iter()
                                        .map(|t| view! { <Badge>{*t}</Badge> })
                                        .collect_view()}
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(entries: &'static [ExperienceEntry]) -> impl IntoView {
    view! {
        <section id="experience" class=format!("{CONTAINER} py-12 md:py-20")>
            <SectionTitle text="Experience" />
            <div class="space-y-4">
                {entries
                    .iter()
                    .map(|e| {
                        view! {
                            <Card class="experience-card">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{e.role}</h3>
                                        <span class="opacity-70">"· " {e.company}</span>
                                        <ul class="mt-2 list-disc pl-5 text-sm text-white/80">
                                            {e
                                                .bullets
                                                .iter()
                                                .map(|b| view! { <li>{*b}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                    <div class="text-sm opacity-70">{e.period}</div>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CertificatesSection(
    certificates: &'static [Certificate],
    on_view: Callback<Certificate>,
) -> impl IntoView {
    view! {
        <section id="certs" class=format!("{CONTAINER} py-12 md:py-20")>
            <SectionTitle text="Certifications & Education" />
            <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-4">
                {certificates
                    .iter()
                    .copied()
                    .map(|c| {
                        view! {
                            <Card class="cert-card">
                                <div class="flex flex-col gap-2">
                                    <div class="flex items-center gap-3">
                                        <i class="extra-award" />
                                        <div>
                                            <div class="font-medium">{c.title}</div>
                                            <div class="text-sm opacity-80">
                                                {c.provider} " · " {c.year}
                                            </div>
                                        </div>
                                    </div>
                                    <button
                                        on:click=move |_| on_view.run(c)
                                        class="mt-2 inline-flex items-center gap-1 text-sm text-cyan-400 hover:underline"
                                    >
                                        "View Certificate "
                                        <i class="extra-external-link" />
                                    </button>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn PostsSection(posts: &'static [Post]) -> impl IntoView {
    view! {
        <section id="blog" class=format!("{CONTAINER} py-12 md:py-20")>
            <SectionTitle text="Writing & Talks" />
            <div class="grid md:grid-cols-2 gap-6">
                {posts
                    .iter()
                    .map(|post| {
                        view! {
                            <Card class="post-card">
                                <h3 class="font-semibold">{post.title}</h3>
                                <div class="text-xs opacity-60 mt-1">{post.date}</div>
                                <p class="mt-2 text-sm text-white/80">{post.excerpt}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer(profile: Profile) -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 py-8 mt-8 flex flex-col md:flex-row items-center justify-between opacity-80">
            <div>{format!("© {} {}", build_year(), profile.name)}</div>
            <div class="flex items-center gap-4 mt-2 md:mt-0">
                <a href=profile.github class="inline-flex items-center gap-1 hover:underline">
                    <i class="devicon-github-plain" />
                    " GitHub"
                </a>
                <a href=profile.linkedin class="inline-flex items-center gap-1 hover:underline">
                    <i class="devicon-linkedin-plain" />
                    " LinkedIn"
                </a>
                <a href=profile.mailto() class="inline-flex items-center gap-1 hover:underline">
                    <i class="extra-email" />
                    " Email"
                </a>
                {profile
                    .website()
                    .map(|site| {
                        view! {
                            <a href=site class="inline-flex items-center gap-1 hover:underline">
                                <i class="extra-link" />
                                " Website"
                            </a>
                        }
                    })}
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.set();
        f().to_html()
    }

    #[test]
    fn test_empty_projects_render_no_cards() {
        let html = render(|| view! { <ProjectsSection projects=&[] /> });
        assert_eq!(html.matches("project-card").count(), 0);
        assert!(html.contains("Featured Projects"));
    }

    #[test]
    fn test_projects_render_in_order() {
        let html = render(|| view! { <ProjectsSection projects=PROJECTS /> });
        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
        let first = html.find(PROJECTS[0].title).expect("first project rendered");
        let second = html
            .find("Customer Segmentation &amp; Uplift Modeling")
            .expect("second project rendered");
        assert!(first < second);
        assert!(html.contains("Streamlit"));
    }

    #[test]
    fn test_certificate_cards() {
        let html = render(|| {
            view! { <CertificatesSection certificates=CERTIFICATES on_view=Callback::new(|_| {}) /> }
        });
        assert_eq!(html.matches("cert-card").count(), CERTIFICATES.len());
        assert_eq!(html.matches("View Certificate").count(), CERTIFICATES.len());
    }

    #[test]
    fn test_empty_sections_render() {
        let html = render(|| {
            view! {
                <ExperienceSection entries=&[] />
                <PostsSection posts=&[] />
                <CertificatesSection certificates=&[] on_view=Callback::new(|_| {}) />
            }
        });
        assert_eq!(html.matches("experience-card").count(), 0);
        assert_eq!(html.matches("post-card").count(), 0);
        assert_eq!(html.matches("cert-card").count(), 0);
    }

    #[test]
    fn test_footer_website_link_is_optional() {
        let html = render(|| view! { <Footer profile=PROFILE /> });
        assert!(html.contains("mailto:you@example.com"));
        assert!(!html.contains("Website"));

        let profile = Profile {
            website: "https://example.com",
            ..PROFILE
        };
        let html = render(move || view! { <Footer profile /> });
        assert!(html.contains("https://example.com"));
        assert!(html.contains("Website"));
    }

    #[test]
    fn test_view_certificate_opens_overlay() {
        let owner = Owner::new();
        owner.set();
        let overlay = RwSignal::new(Overlay::default());
        let open = certificate_opener(overlay);

        open.run(CERTIFICATES[1]);
        assert_eq!(
            overlay.get_untracked().document().map(|d| (d.url.as_str(), d.title.as_str())),
            Some(("/E1.pdf", "Machine Learning Certification"))
        );

        open.run(CERTIFICATES[4]);
        assert_eq!(
            overlay.get_untracked().document().map(|d| d.url.clone()),
            Some("/E4.pdf".to_string())
        );

        overlay.update(Overlay::close);
        assert!(!overlay.get_untracked().is_open());
    }

    #[test]
    fn test_page_starts_with_overlay_closed() {
        let html = render(|| view! { <PortfolioPage /> });
        assert!(!html.contains("<iframe"));
        assert!(html.contains("Banuso Hamzah Ademola"));
    }
}
