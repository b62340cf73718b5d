//! Static copy for the page: hero text, easter eggs, footer.

pub struct Hero {
    pub kicker: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
}

pub const HERO: Hero = Hero {
    kicker: "SOCSE Chai Wala",
    headline: "Brewed for Campus, Spiced for Culture",
    tagline: "A playful community where chai meets memes, ideas, and orders. \
              Tap around for easter eggs — k-pop? nah, hip-hop chai drops.",
};

/// A clickable label that reveals a quote
#[derive(Debug, PartialEq, Eq)]
pub struct EasterEgg {
    pub label: &'static str,
    pub quote: &'static str,
    /// CSS offsets within the egg strip
    pub top: &'static str,
    pub left: &'static str,
}

pub const EASTER_EGGS: &[EasterEgg] = &[
    EasterEgg {
        label: "chai & chill",
        quote: "Started from the lab, now we’re brewed.",
        top: "18%",
        left: "12%",
    },
    EasterEgg {
        label: "genz brainrot",
        quote: "No thoughts, only boba. skibidi sip 💅",
        top: "62%",
        left: "18%",
    },
    EasterEgg {
        label: "hip-hop drop",
        quote: "If you’re reading this, it’s tea late.",
        top: "38%",
        left: "76%",
    },
];

pub const FOOTER_BRAND: &str = "SOCSE Chai Wala • brewed by RVU grads";
