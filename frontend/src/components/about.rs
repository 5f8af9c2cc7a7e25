use crate::components::contact_form::ContactModal;
use crate::components::footer::Footer;
use crate::components::icons::{ArrowRight, Briefcase, MapPin};
use crate::components::job_application_form::JobApplicationForm;
use crate::components::loading_screen::LoadingGate;
use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use factfusion_shared::loading::INTERNAL_PAGE_CAP;
use leptos::prelude::*;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Dr. Emma Chen",
        role: "Chief AI Scientist",
        bio: "Leading expert in machine learning with 15+ years experience in AI and NLP. Previously worked at Google AI and has published over 30 research papers on deep learning.",
    },
    TeamMember {
        name: "Michael Rodriguez",
        role: "Data Engineering Lead",
        bio: "Big data specialist with expertise in database architecture and distributed systems. Former engineer at IBM and AWS, with a passion for building scalable data solutions.",
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "UX/UI Director",
        bio: "Award-winning designer focused on creating intuitive user experiences that bridge complex technology and human needs. Previously at Apple and Stripe.",
    },
    TeamMember {
        name: "Dr. James Wilson",
        role: "Chief Research Officer",
        bio: "Former professor of computational linguistics with a focus on misinformation patterns. Published author and frequent speaker on media integrity and trust.",
    },
    TeamMember {
        name: "Aisha Patel",
        role: "Media Analytics Expert",
        bio: "Specialist in multimedia content analysis with expertise in deepfake detection and image forensics. Previously worked for a major news organization.",
    },
    TeamMember {
        name: "David Kim",
        role: "CTO",
        bio: "Technology innovator with 20+ years experience building cutting-edge platforms. Serial entrepreneur with multiple successful exits in the tech space.",
    },
];

struct Position {
    title: &'static str,
    team: &'static str,
    location: &'static str,
}

const OPEN_POSITIONS: [Position; 3] = [
    Position {
        title: "Machine Learning Engineer",
        team: "AI Research",
        location: "Remote",
    },
    Position {
        title: "Media Forensics Analyst",
        team: "Verification",
        location: "Knowledge City",
    },
    Position {
        title: "Frontend Engineer",
        team: "Product",
        location: "Remote",
    },
];

/// 成员头像用姓名首字母
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .filter_map(|part| part.chars().next())
        .collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <LoadingGate cap=INTERNAL_PAGE_CAP>
            <div class="min-h-screen bg-base-200 flex flex-col">
                <Navbar />
                <main class="flex-1 pt-28 pb-20">
                    <Story />
                    <Team />
                    <JoinUs />
                </main>
                <Footer />
            </div>
        </LoadingGate>
    }
}

#[component]
fn Story() -> impl IntoView {
    view! {
        <section class="px-4 mb-20">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-16">
                    <h1 class="text-3xl md:text-5xl font-bold mb-6">
                        "About "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                            "FactFusion"
                        </span>
                    </h1>
                    <p class="text-xl opacity-80 max-w-3xl mx-auto">
                        "We're on a mission to combat misinformation with advanced technology and innovative solutions."
                    </p>
                </div>

                <div class="flex flex-col md:flex-row gap-12 items-center">
                    <div class="md:w-1/2">
                        <h2 class="text-2xl md:text-3xl font-bold mb-6">"Our Story"</h2>
                        <div class="space-y-4 opacity-80">
                            <p>
                                "Founded in 2022, FactFusion began with a simple but ambitious goal: to create technology that could help people distinguish fact from fiction in an increasingly complex media landscape."
                            </p>
                            <p>
                                "Our team of AI researchers, data scientists, and media experts came together with a shared concern about the rise of misinformation and its impact on society. We recognized that traditional fact-checking methods couldn't scale to meet the challenge."
                            </p>
                            <p>
                                "Today, FactFusion combines cutting-edge artificial intelligence with human expertise to analyze and verify content across text, images, audio, and video, delivering trustworthy information analysis at scale."
                            </p>
                        </div>
                    </div>
                    <div class="md:w-1/2 w-full h-[400px] relative rounded-2xl overflow-hidden bg-base-300">
                        <div class="absolute inset-0 bg-gradient-to-br from-primary/20 to-secondary/20"></div>
                        <div class="absolute inset-0 flex items-center justify-center">
                            <div class="relative w-48 h-48">
                                <div class="absolute inset-0 bg-gradient-to-tr from-primary to-secondary rounded-full opacity-80 animate-pulse"></div>
                                <div class="absolute inset-4 bg-base-300 rounded-full flex items-center justify-center">
                                    <span class="font-bold text-6xl">"FF"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Team() -> impl IntoView {
    view! {
        <section class="px-4 py-16 bg-base-300">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">
                        "Our "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                            "Team"
                        </span>
                    </h2>
                    <p class="text-lg opacity-80 max-w-2xl mx-auto">
                        "Meet the experts and innovators building the future of fact-checking technology."
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body items-center text-center">
                                        <div class="avatar placeholder mb-2">
                                            <div class="bg-gradient-to-tr from-primary to-secondary text-primary-content rounded-full w-20">
                                                <span class="text-2xl font-bold">{initials(member.name)}</span>
                                            </div>
                                        </div>
                                        <h3 class="card-title">{member.name}</h3>
                                        <p class="text-primary text-sm font-medium">{member.role}</p>
                                        <p class="text-sm opacity-70">{member.bio}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn JoinUs() -> impl IntoView {
    let show_positions = RwSignal::new(false);
    let contact_open = RwSignal::new(false);
    let apply_open = RwSignal::new(false);
    let applying_for = RwSignal::new("");

    let apply = move |title: &'static str| {
        applying_for.set(title);
        apply_open.set(true);
    };

    view! {
        <section class="px-4 py-16">
            <div class="container mx-auto max-w-6xl">
                <div class="card bg-base-100 shadow-xl p-8 sm:p-12">
                    <div class="text-center mb-8">
                        <h2 class="text-3xl font-bold mb-4">
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                                "Join Our Mission"
                            </span>
                        </h2>
                        <p class="text-lg opacity-80 max-w-2xl mx-auto">
                            "We're always looking for talented individuals who are passionate about fighting misinformation and building technology for a better-informed world."
                        </p>
                    </div>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <button
                            type="button"
                            class="btn btn-primary btn-lg"
                            on:click=move |_| show_positions.update(|v| *v = !*v)
                        >
                            "View Open Positions"
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline btn-lg"
                            on:click=move |_| contact_open.set(true)
                        >
                            "Contact Us"
                        </button>
                    </div>

                    <Show when=move || show_positions.get()>
                        <div class="mt-10 space-y-4">
                            {OPEN_POSITIONS
                                .iter()
                                .map(|position| {
                                    let title = position.title;
                                    view! {
                                        <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4 p-4 bg-base-200 rounded-lg">
                                            <div>
                                                <h3 class="font-semibold flex items-center gap-2">
                                                    <Briefcase attr:class="w-4 h-4 text-primary" />
                                                    {title}
                                                </h3>
                                                <p class="text-sm opacity-70 flex items-center gap-2">
                                                    <span>{position.team}</span>
                                                    <span>"•"</span>
                                                    <MapPin attr:class="w-3 h-3" />
                                                    <span>{position.location}</span>
                                                </p>
                                            </div>
                                            <button
                                                type="button"
                                                class="btn btn-primary btn-sm gap-2"
                                                on:click=move |_| apply(title)
                                            >
                                                "Apply"
                                                <ArrowRight attr:class="w-4 h-4" />
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>

            <Modal open=apply_open title="Apply for Position">
                <p class="text-sm opacity-70 mb-4">{move || applying_for.get()}</p>
                <JobApplicationForm
                    job_title=applying_for.get_untracked()
                    on_done=move |_: ()| apply_open.set(false)
                />
            </Modal>
            <ContactModal open=contact_open />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_titles() {
        assert_eq!(initials("Dr. Emma Chen"), "EC");
        assert_eq!(initials("David Kim"), "DK");
    }
}
