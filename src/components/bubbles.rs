use yew::prelude::*;

use crate::motion::parallax::{Frame, Motion, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Cube,
    ShoppingCart,
    Tag,
    Search,
    Users,
    Upload,
    Download,
    Folder,
    Star,
    Layers,
    Heart,
    HelpCircle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
    pub icon_color: &'static str,
    pub motion: Motion,
}

impl Bubble {
    /// Stacking order: earlier bubbles sit above later ones.
    pub fn z_index(index: usize) -> i32 {
        50 - 5 * index as i32
    }

    pub fn frame(&self, progress: f64) -> Frame {
        self.motion.at(progress)
    }
}

const fn motion(
    x: (f64, f64),
    y: (f64, f64),
    scale: (f64, f64),
    opacity: (f64, f64),
) -> Motion {
    Motion {
        x: Span::new(x.0, x.1),
        y: Span::new(y.0, y.1),
        scale: Span::new(scale.0, scale.1),
        opacity: Span::new(opacity.0, opacity.1),
    }
}

pub static BUBBLES: [Bubble; 12] = [
    Bubble {
        icon: Icon::Cube,
        title: "3D Models",
        description: "Browse thousands of high-quality 3D models for your projects. Filter by category, style, format, and more.",
        gradient: "gradient-indigo",
        icon_color: "icon-indigo",
        motion: motion((-280.0, -140.0), (-200.0, -100.0), (0.5, 0.8), (0.4, 0.8)),
    },
    Bubble {
        icon: Icon::ShoppingCart,
        title: "Checkout",
        description: "Fast and secure payments for your 3D model purchases",
        gradient: "gradient-emerald",
        icon_color: "icon-green",
        motion: motion((260.0, 180.0), (-180.0, -90.0), (0.6, 0.9), (0.6, 0.9)),
    },
    Bubble {
        icon: Icon::Tag,
        title: "Pricing",
        description: "Flexible pricing options for creators and businesses",
        gradient: "gradient-amber",
        icon_color: "icon-orange",
        motion: motion((-180.0, -90.0), (-10.0, 120.0), (0.7, 1.0), (0.8, 1.0)),
    },
    Bubble {
        icon: Icon::Search,
        title: "Search",
        description: "Find exactly what you need with our powerful search tools",
        gradient: "gradient-blue",
        icon_color: "icon-blue",
        motion: motion((180.0, 130.0), (-10.0, 160.0), (0.6, 0.9), (0.6, 0.9)),
    },
    Bubble {
        icon: Icon::Users,
        title: "Community",
        description: "Join thousands of 3D artists and designers",
        gradient: "gradient-purple",
        icon_color: "icon-purple",
        motion: motion((-130.0, -65.0), (60.0, 200.0), (0.5, 0.8), (0.4, 0.8)),
    },
    Bubble {
        icon: Icon::Upload,
        title: "Upload Models",
        description: "Share your creations with our community. Upload your 3D models and reach thousands of potential buyers.",
        gradient: "gradient-teal",
        icon_color: "icon-teal",
        motion: motion((220.0, 110.0), (-120.0, -20.0), (0.6, 0.9), (0.6, 0.9)),
    },
    Bubble {
        icon: Icon::Download,
        title: "Downloads",
        description: "Access your purchased models anywhere, anytime.",
        gradient: "gradient-cyan",
        icon_color: "icon-cyan",
        motion: motion((-220.0, -110.0), (120.0, 240.0), (0.5, 0.8), (0.4, 0.8)),
    },
    Bubble {
        icon: Icon::Folder,
        title: "Categories",
        description: "Explore our organized collection by categories.",
        gradient: "gradient-pink",
        icon_color: "icon-pink",
        motion: motion((-70.0, -35.0), (100.0, 220.0), (0.6, 0.9), (0.6, 0.9)),
    },
    Bubble {
        icon: Icon::Star,
        title: "Featured Models",
        description: "Discover our handpicked selection of premium 3D models and assets from top creators.",
        gradient: "gradient-yellow",
        icon_color: "icon-yellow",
        motion: motion((-10.0, -5.0), (120.0, 240.0), (0.7, 1.0), (0.8, 1.0)),
    },
    Bubble {
        icon: Icon::Layers,
        title: "Collections",
        description: "Curated sets of models for specific projects and needs.",
        gradient: "gradient-red",
        icon_color: "icon-red",
        motion: motion((70.0, 35.0), (100.0, 220.0), (0.6, 0.9), (0.6, 0.9)),
    },
    Bubble {
        icon: Icon::Heart,
        title: "Favorites",
        description: "Save models you love for quick access later.",
        gradient: "gradient-rose",
        icon_color: "icon-rose",
        motion: motion((220.0, 110.0), (120.0, 240.0), (0.5, 0.8), (0.4, 0.8)),
    },
    Bubble {
        icon: Icon::HelpCircle,
        title: "Support",
        description: "Get help when you need it from our friendly support team.",
        gradient: "gradient-slate",
        icon_color: "icon-slate",
        motion: motion((130.0, 65.0), (60.0, 200.0), (0.6, 0.9), (0.6, 0.9)),
    },
];

/// Outline icon in the lucide style, drawn with `currentColor`.
pub fn icon_svg(icon: Icon, class: &str, size: u32) -> Html {
    let size = size.to_string();
    let shapes = match icon {
        Icon::Cube => html! {
            <>
                <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8z"/>
                <polyline points="3.27,6.96 12,12.01 20.73,6.96"/>
                <line x1="12" y1="22.08" x2="12" y2="12"/>
            </>
        },
        Icon::ShoppingCart => html! {
            <>
                <circle cx="8" cy="21" r="1"/>
                <circle cx="19" cy="21" r="1"/>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>
            </>
        },
        Icon::Tag => html! {
            <>
                <path d="M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.586 8.586a2 2 0 0 0 2.828 0l7.172-7.172a2 2 0 0 0 0-2.828z"/>
                <circle cx="7.5" cy="7.5" r=".5"/>
            </>
        },
        Icon::Search => html! {
            <>
                <circle cx="11" cy="11" r="8"/>
                <path d="m21 21-4.35-4.35"/>
            </>
        },
        Icon::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="m22 21-3-3m0 0a2 2 0 1 0-2.83-2.83 2 2 0 0 0 2.83 2.83Z"/>
            </>
        },
        Icon::Upload => html! {
            <>
                <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                <polyline points="17,8 12,3 7,8"/>
                <line x1="12" y1="3" x2="12" y2="15"/>
            </>
        },
        Icon::Download => html! {
            <>
                <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                <polyline points="7,10 12,15 17,10"/>
                <line x1="12" y1="15" x2="12" y2="3"/>
            </>
        },
        Icon::Folder => html! {
            <path d="M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z"/>
        },
        Icon::Star => html! {
            <polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26"/>
        },
        Icon::Layers => html! {
            <>
                <polygon points="12,2 2,7 12,12 22,7 12,2"/>
                <polyline points="2,17 12,22 22,17"/>
                <polyline points="2,12 12,17 22,12"/>
            </>
        },
        Icon::Heart => html! {
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.29 1.51 4.04 3 5.5l7 7Z"/>
        },
        Icon::HelpCircle => html! {
            <>
                <circle cx="12" cy="12" r="10"/>
                <path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/>
                <path d="M12 17h.01"/>
            </>
        },
    };

    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width={size.clone()} height={size}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" class={class.to_string()}>
            { shapes }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bubble_starts_and_ends_on_its_configured_values() {
        for bubble in BUBBLES.iter() {
            let start = bubble.frame(0.0);
            let end = bubble.frame(1.0);
            let m = bubble.motion;
            assert_eq!(
                (start.x, start.y, start.scale, start.opacity),
                (m.x.start, m.y.start, m.scale.start, m.opacity.start),
                "{}",
                bubble.title
            );
            assert_eq!(
                (end.x, end.y, end.scale, end.opacity),
                (m.x.end, m.y.end, m.scale.end, m.opacity.end),
                "{}",
                bubble.title
            );
        }
    }

    #[test]
    fn stacking_descends_by_five() {
        assert_eq!(Bubble::z_index(0), 50);
        assert_eq!(Bubble::z_index(11), -5);
    }

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = BUBBLES.iter().map(|b| b.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), BUBBLES.len());
    }
}
