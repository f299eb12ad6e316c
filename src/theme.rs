use std::fmt::Write;

pub struct Swatch {
    pub name: &'static str,
    pub shades: &'static [(u32, &'static str)],
}

pub struct Breakpoint {
    pub name: &'static str,
    pub min_width: u32,
}

pub struct Keyframes {
    pub name: &'static str,
    pub steps: &'static [(&'static str, &'static str)],
}

pub struct Animation {
    pub name: &'static str,
    pub value: &'static str,
}

/// Site-wide design tokens: palette, breakpoints and animations.
///
/// `dark` holds the colours used under `prefers-color-scheme: dark`, keyed by
/// role rather than by swatch.
pub struct Theme {
    pub palette: &'static [Swatch],
    pub dark: &'static [(&'static str, &'static str)],
    pub breakpoints: &'static [Breakpoint],
    pub keyframes: &'static [Keyframes],
    pub animations: &'static [Animation],
}

pub static THEME: Theme = Theme {
    palette: &[
        Swatch {
            name: "primary",
            shades: &[(6000, "#ef233c"), (7000, "#d91e2f")],
        },
        Swatch {
            name: "secondary",
            shades: &[(6000, "#04868b"), (7000, "#036a6e")],
        },
    ],
    dark: &[
        ("background", "#111827"),
        ("text", "#ffffff"),
        ("heading", "#e6e6e6"),
        ("subtitle", "#a3a3a3"),
        ("muted", "#d1d5db"),
        ("surface", "#1f2937"),
        ("hover", "#374151"),
        ("border", "#4b5563"),
        ("bubble", "rgba(255, 255, 255, 0.1)"),
        ("bubble-border", "rgba(255, 255, 255, 0.2)"),
    ],
    breakpoints: &[
        Breakpoint { name: "1.7sm", min_width: 480 },
        Breakpoint { name: "2sm", min_width: 640 },
        Breakpoint { name: "2md", min_width: 768 },
        Breakpoint { name: "lg", min_width: 1024 },
        Breakpoint { name: "xl", min_width: 1280 },
        Breakpoint { name: "2xl", min_width: 1536 },
        Breakpoint { name: "3xl", min_width: 1920 },
        Breakpoint { name: "4xl", min_width: 2560 },
        Breakpoint { name: "5xl", min_width: 3200 },
        Breakpoint { name: "6xl", min_width: 3840 },
    ],
    keyframes: &[
        Keyframes {
            name: "blink",
            steps: &[("0%, 50%", "opacity: 1;"), ("51%, 100%", "opacity: 0;")],
        },
        Keyframes {
            name: "fadeIn",
            steps: &[("0%", "opacity: 0;"), ("100%", "opacity: 1;")],
        },
        Keyframes {
            name: "slideUp",
            steps: &[
                ("0%", "transform: translateY(20px); opacity: 0;"),
                ("100%", "transform: translateY(0); opacity: 1;"),
            ],
        },
        Keyframes {
            name: "heroTextIn",
            steps: &[
                ("0%", "transform: translateY(40px); opacity: 0;"),
                ("100%", "transform: translateY(0); opacity: 1;"),
            ],
        },
        Keyframes {
            name: "heroButtonIn",
            steps: &[
                ("0%", "transform: translateY(20px) scale(0.95); opacity: 0;"),
                ("100%", "transform: translateY(0) scale(1); opacity: 1;"),
            ],
        },
        Keyframes {
            name: "blurIn",
            steps: &[
                ("0%", "transform: scale(0.8) rotate(0deg); opacity: 0;"),
                ("100%", "transform: scale(1) rotate(360deg); opacity: 0.1;"),
            ],
        },
    ],
    animations: &[
        Animation { name: "blink", value: "blink 1s step-start infinite" },
        Animation { name: "fade-in", value: "fadeIn 0.5s ease-in-out" },
        Animation { name: "slide-up", value: "slideUp 0.5s ease-out" },
    ],
};

impl Theme {
    pub fn breakpoint(&self, name: &str) -> Option<u32> {
        self.breakpoints
            .iter()
            .find(|bp| bp.name == name)
            .map(|bp| bp.min_width)
    }

    pub fn color(&self, swatch: &str, shade: u32) -> Option<&'static str> {
        self.palette
            .iter()
            .find(|s| s.name == swatch)
            .and_then(|s| s.shades.iter().find(|(level, _)| *level == shade))
            .map(|(_, hex)| *hex)
    }

    pub fn dark_color(&self, role: &str) -> Option<&'static str> {
        self.dark
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, value)| *value)
    }

    /// Global stylesheet: colour variables, keyframes and animation helpers.
    pub fn stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for swatch in self.palette {
            for (shade, hex) in swatch.shades {
                let _ = writeln!(css, "  --color-{}-{}: {};", swatch.name, shade, hex);
            }
        }
        css.push_str("}\n");

        for frames in self.keyframes {
            let _ = writeln!(css, "@keyframes {} {{", frames.name);
            for (at, body) in frames.steps {
                let _ = writeln!(css, "  {} {{ {} }}", at, body);
            }
            css.push_str("}\n");
        }

        for animation in self.animations {
            let _ = writeln!(
                css,
                ".animate-{} {{ animation: {}; }}",
                animation.name, animation.value
            );
        }

        css.push_str(
            "body { margin: 0; font-family: system-ui, sans-serif; background: #ffffff; color: #1e1e1e; }\n",
        );
        css.push_str("@media (prefers-color-scheme: dark) {\n");
        let _ = writeln!(
            css,
            "  body {{ background: {}; color: {}; }}",
            self.dark_color("background").unwrap_or("#111827"),
            self.dark_color("text").unwrap_or("#ffffff"),
        );
        css.push_str("}\n");
        css
    }
}
