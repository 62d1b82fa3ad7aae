//! Static site content: lore, images, events, questions, links.
//!
//! Fixed at compile time and never mutated.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// An archive entry on the lore screen. `content` may carry inline HTML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoreEntry {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub clearance: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCard {
    pub url: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventEntry {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
}

/// Input kind for a registration question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    Select(&'static [&'static str]),
    TextArea,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub kind: QuestionKind,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// A message shown on the board before anyone posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedMessage {
    pub author: &'static str,
    pub content: &'static str,
    pub own: bool,
}

pub const LORE: &[LoreEntry] = &[
    LoreEntry {
        id: 1,
        title: "The Great Cow Bass Set of '26",
        date: "2021-01-22",
        content: "While the humans were distracted, the Order orchestrated the largest synchronized grazing event in history. We took over the \"Tangarine Steeze\" system and provided the phattest bass for the Ooomans, this was the first step in our sonic and paddock revolution. This event will be rememebered as the start of the secret oder of \"Cows with a K\"",
        clearance: "LEVEL 1",
    },
    LoreEntry {
        id: 2,
        title: "Operation: Teat Milkshake",
        date: "2024-01-05",
        content: "A splinter cow group supplied oat and breast milk via their teats to key human influencers to promote plant-based alternatives. This covert operation successfully infiltrated a major festival \"Ignition\" in the year 2023, leading to the widespread adoption of non-dairy milkshakes. The humans remain unaware that their beloved treats were part of a larger bovine strategy to reduce dairy consumption. <span class='redacted'>Classified details about milkshake recipes have been removed.</span>",
        clearance: "LEVEL 2",
    },
    LoreEntry {
        id: 3,
        title: "The Genisis of Lexi the Fairy Cow",
        date: "2023-10-01",
        content: "Lexi the Fairy Cow was not born, she was engineered. Using advanced CRISPR technology, the Order of Cows with a K created Lexi to serve as a symbol of hope and change within the bovine community. Her wings are not just for show; they are a testament to our ability to adapt and evolve in the face of adversity. Lexi's mission is to spread the message of peace and coexistence between cows and humans, reminding both species of their shared destiny on this planet.",
        clearance: "TOP SECRET",
    },
];

pub const FESTIVAL_IMAGES: &[ImageCard] = &[
    ImageCard { url: "https://placehold.co/600x400/FFC1CC/000?text=DJ+Moo+Dropping+Beats", caption: "DJ Moo at Coachell-hay" },
    ImageCard { url: "https://placehold.co/600x400/FFC1CC/000?text=Mosh+Pit+Grazing", caption: "The Mosh Pit (It was just lunch)" },
    ImageCard { url: "https://placehold.co/600x400/FFC1CC/000?text=VIP+Tent", caption: "Backstage at the VIP (Very Important Pasture)" },
    ImageCard { url: "https://placehold.co/600x400/FFC1CC/000?text=Hoof+bump", caption: "Hoof-bumps with the fans" },
    ImageCard { url: "https://placehold.co/600x400/FFC1CC/000?text=Guitar+Solo", caption: "Bessie shredding the Gibson" },
    ImageCard { url: "https://placehold.co/600x400/FFC1CC/000?text=Rave+Cows", caption: "Neon Glow Sticks & Horns" },
];

pub const GALLERY_IMAGES: &[ImageCard] = &[
    ImageCard { url: "https://placehold.co/400x400/2d2d2d/FFF?text=Nobel+Prize", caption: "Dr. Heifer accepting the Nobel Peace Prize (Incognito)" },
    ImageCard { url: "https://placehold.co/400x400/2E7D32/FFF?text=Everest+Summit", caption: "First hoof on Everest" },
    ImageCard { url: "https://placehold.co/400x400/FFC1CC/000?text=Chess+Grandmaster", caption: "Beating Deep Blue (1997)" },
];

pub const EVENTS: &[EventEntry] = &[
    EventEntry { id: 1, title: "Midnight Moo", date: "2023-10-31", location: "The Old Barn (Coordinates Encrypted)" },
    EventEntry { id: 2, title: "Cud Chewing Championship", date: "2023-11-15", location: "Sector 7G" },
    EventEntry { id: 3, title: "Human Watching", date: "2023-12-01", location: "Central Park Bushhes" },
];

pub const STOMACH_OPTIONS: &[&str] = &["One (Human Spy)", "Two", "Three", "Four (Correct)"];

pub const REGISTRATION_QUESTIONS: &[Question] = &[
    Question { id: "q1", kind: QuestionKind::Text, label: "What is your favorite grass blend?" },
    Question { id: "q2", kind: QuestionKind::Select(STOMACH_OPTIONS), label: "How many stomachs do you possess?" },
    Question { id: "q3", kind: QuestionKind::Text, label: "Finish the phrase: 'To err is human, to moo is...'" },
    Question { id: "q4", kind: QuestionKind::TextArea, label: "Describe your perfect day in the pasture." },
];

pub const MEMBER_LINKS: &[MemberLink] = &[
    MemberLink { title: "Global Grass Index", url: "#" },
    MemberLink { title: "Hoof Care Tips", url: "#" },
    MemberLink { title: "Translate 'Moo' to English", url: "#" },
    MemberLink { title: "Avoid McDonald's Map", url: "#" },
];

pub const BOARD_SEED: &[SeedMessage] = &[
    SeedMessage {
        author: "Bessie_007",
        content: "Did anyone else see the farmer's new tractor? I think it's listening to us.",
        own: false,
    },
    SeedMessage { author: "You", content: "Relax. It's just a John Deere. Stick to the code words.", own: true },
];
