use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExplorePrompt {
    pub title: &'static str,
    pub prompt: &'static str,
    pub hint: &'static str,
}

impl ExplorePrompt {
    pub fn catalog() -> [ExplorePrompt; 6] {
        [
            ExplorePrompt {
                title: "Bioluminescent Forest",
                prompt: "A mystical forest at midnight, filled with glowing, bioluminescent mushrooms and ethereal sprites dancing among ancient trees.",
                hint: "bioluminescent forest",
            },
            ExplorePrompt {
                title: "Solar Punk Utopia",
                prompt: "A futuristic eco-city where nature and technology coexist in harmony, with buildings covered in lush greenery and powered by solar panels.",
                hint: "solarpunk utopia",
            },
            ExplorePrompt {
                title: "Interstellar Nebula",
                prompt: "A breathtaking view of a colorful interstellar gas cloud, with newborn stars igniting within its swirling cosmic dust.",
                hint: "interstellar nebula",
            },
            ExplorePrompt {
                title: "Crystal Desert",
                prompt: "A vast desert landscape at sunset, where giant, shimmering crystals erupt from the sandy dunes, catching the last rays of light.",
                hint: "crystal desert",
            },
            ExplorePrompt {
                title: "Floating Sky Castle",
                prompt: "A majestic castle floating high in the clouds, with waterfalls cascading down its sides into the endless sky below.",
                hint: "sky castle",
            },
            ExplorePrompt {
                title: "Gothic Library",
                prompt: "A grand, ancient library with towering shelves of books, intricate gothic architecture, and long, dramatic shadows cast by candlelight.",
                hint: "gothic library",
            },
        ]
    }
}
