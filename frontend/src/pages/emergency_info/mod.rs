use crate::components::layout::{Layout, PageTitle};
use leptos::*;

pub struct Helpline {
    pub service: &'static str,
    pub number: &'static str,
}

pub const HELPLINES: &[Helpline] = &[
    Helpline { service: "Police", number: "100" },
    Helpline { service: "Fire", number: "101" },
    Helpline { service: "Ambulance", number: "102" },
    Helpline { service: "Disaster Management", number: "108" },
    Helpline { service: "Women Helpline", number: "1091" },
    Helpline { service: "Child Helpline", number: "1098" },
];

pub const FIRST_AID: &[(&str, &[&str])] = &[
    (
        "CPR Basics",
        &[
            "Check the scene is safe and the person is unresponsive",
            "Call for emergency help",
            "Push hard and fast in the centre of the chest, 100-120 per minute",
        ],
    ),
    (
        "Treating Burns",
        &[
            "Cool the burn under running water for 10 minutes",
            "Remove jewellery near the burn",
            "Cover loosely with a clean, non-fluffy dressing",
        ],
    ),
    (
        "Choking First Aid",
        &[
            "Encourage the person to cough",
            "Give up to 5 back blows between the shoulder blades",
            "Give up to 5 abdominal thrusts if blows fail",
        ],
    ),
];

#[component]
pub fn EmergencyInfoPage() -> impl IntoView {
    view! {
        <Layout>
            <PageTitle
                title="Emergency Information"
                subtitle="Quick access to emergency contacts and critical information"
            />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                {HELPLINES
                    .iter()
                    .map(|line| view! {
                        <a href=format!("tel:{}", line.number) class="bg-surface-elevated rounded-lg shadow p-5 block">
                            <p class="text-sm font-medium text-fg-muted">{line.service}</p>
                            <p class="text-2xl font-bold text-fg">{line.number}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
            <h3 class="text-xl font-semibold text-fg mb-4">"First Aid Guide"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {FIRST_AID
                    .iter()
                    .map(|(title, steps)| view! {
                        <div class="bg-surface-elevated rounded-lg shadow p-5">
                            <h4 class="font-semibold text-fg mb-2">{*title}</h4>
                            <ol class="list-decimal list-inside text-sm text-fg-muted space-y-1">
                                {steps.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                            </ol>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Layout>
    }
}
