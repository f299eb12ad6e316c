use log::{debug, warn};
use yew::prelude::*;

use crate::components::bubbles::{icon_svg, Bubble, BUBBLES};
use crate::config::SEARCH_ROUTE;
use crate::motion::parallax::{shift_y_style, Span};
use crate::motion::scroll::ScrollWatcher;
use crate::motion::timers::GlooTimers;
use crate::motion::typewriter::{CursorBlink, TypewriterDriver};
use crate::theme::THEME;

pub static HERO_TEXTS: [&str; 4] = [
    "Discover, Buy, and Sell\nDigital Products",
    "Sell for Free,\nPay Only When You Earn",
    "Instant Payouts,\nFull Control, No Limits",
    "Buy Once, Download\nAnytime, Keep Forever",
];

const BACKGROUND_SHIFT: Span = Span::new(0.0, 50.0);
const TEXT_SHIFT: Span = Span::new(0.0, -20.0);

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    #[prop_or_default]
    pub class: Classes,
}

struct BackdropLayer {
    side: &'static str,
    track_style: String,
    blob_style: String,
}

/// Background blobs. The scroll shift goes on the track so the blob's own
/// `blurIn` entrance keeps control of its transform.
fn backdrop_layers(progress: f64) -> [BackdropLayer; 2] {
    let track_style = shift_y_style(&BACKGROUND_SHIFT, progress);
    let primary = THEME.color("primary", 6000).unwrap_or("#ef233c");
    let secondary = THEME.color("secondary", 6000).unwrap_or("#04868b");
    [
        BackdropLayer {
            side: "blur-left",
            track_style: track_style.clone(),
            blob_style: format!("background: {};", primary),
        },
        BackdropLayer {
            side: "blur-right",
            track_style,
            blob_style: format!("background: {};", secondary),
        },
    ]
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = ScrollWatcher::new(Callback::from(move |value: f64| progress.set(value)));
                if let Err(e) = watcher.start() {
                    warn!("parallax disabled: {}", e);
                }

                move || {
                    watcher.stop();
                    debug!("hero section torn down");
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("hero-wrapper", props.class.clone())} role="banner" aria-label="Hero section">
            <a href="#main-content" class="skip-link">{"Skip to main content"}</a>

            <section class="hero-stage">
                <div class="hero-backdrop">
                    { for backdrop_layers(*progress).into_iter().map(|layer| html! {
                        <div class={classes!("blur-track", layer.side)} style={layer.track_style}>
                            <div class="blur-element" style={layer.blob_style}></div>
                        </div>
                    }) }
                </div>

                <div class="hero-content" id="main-content">
                    <div class="hero-column" style={shift_y_style(&TEXT_SHIFT, *progress)}>
                        <div class="hero-text">
                            <Headline />
                        </div>

                        <div class="hero-text">
                            <p class="hero-subtitle">
                                {"Your one-stop digital platform for 3D models and digital creations."}
                                <br class="wide-only" />
                                {"Join our community of creators and collectors today."}
                            </p>
                        </div>

                        <div class="hero-button">
                            <a href={SEARCH_ROUTE} class="hero-cta" role="button"
                                aria-label="Explore all products - Navigate to product search page">
                                <span>{"Explore all products"}</span>
                                <svg class="hero-cta-chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                                </svg>
                            </a>
                        </div>

                        <BubbleField progress={*progress} />
                    </div>
                </div>
            </section>

            <section class="scroll-test-area">
                <div>
                    <h2>{"Scroll Animation Test Area"}</h2>
                    <p>{"Scroll up to see the floating bubbles move and test hover effects"}</p>
                </div>
            </section>

            <HeroStyles />
        </div>
    }
}

/// Typewriter headline. Owns the text and cursor state so their ticks only
/// re-render this subtree.
#[function_component(Headline)]
fn headline() -> Html {
    let text = use_state(String::new);
    let cursor_visible = use_state(|| true);

    // Typewriter and cursor blink live exactly as long as the component.
    {
        let text = text.clone();
        let cursor_visible = cursor_visible.clone();
        use_effect_with_deps(
            move |_| {
                let typewriter = TypewriterDriver::new(
                    GlooTimers,
                    &HERO_TEXTS,
                    Callback::from(move |value: String| text.set(value)),
                );
                let blink = CursorBlink::new(
                    GlooTimers,
                    Callback::from(move |visible: bool| cursor_visible.set(visible)),
                );
                typewriter.start();
                blink.start();

                move || {
                    typewriter.stop();
                    blink.stop();
                }
            },
            (),
        );
    }

    html! { <TypedText text={(*text).clone()} cursor_visible={*cursor_visible} /> }
}

#[function_component(HeroStyles)]
fn hero_styles() -> Html {
    let css = use_memo(|_| hero_css(), ());
    html! { <style>{ (*css).clone() }</style> }
}

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub text: String,
    pub cursor_visible: bool,
}

#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let lines: Vec<&str> = props.text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let cursor_class = if props.cursor_visible { "cursor cursor-on" } else { "cursor cursor-off" };

    html! {
        <h1 class="hero-heading" aria-label="Discover, Buy, and Sell Digital Products">
            <span class="typed" aria-live="polite">
                { for lines.iter().enumerate().map(|(i, line)| html! {
                    <>
                        { *line }
                        if i < last { <br /> }
                    </>
                }) }
            </span>
            <span class={cursor_class} aria-hidden="true">{"|"}</span>
        </h1>
    }
}

#[derive(Properties, PartialEq)]
pub struct BubbleFieldProps {
    pub progress: f64,
}

#[function_component(BubbleField)]
pub fn bubble_field(props: &BubbleFieldProps) -> Html {
    html! {
        <>
            { for BUBBLES.iter().enumerate().map(|(index, bubble)| html! {
                <BubbleItem key={index} index={index} bubble={bubble} progress={props.progress} />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BubbleItemProps {
    pub index: usize,
    pub bubble: &'static Bubble,
    pub progress: f64,
}

#[function_component(BubbleItem)]
pub fn bubble_item(props: &BubbleItemProps) -> Html {
    let bubble = props.bubble;
    let style = bubble.frame(props.progress).to_style(Bubble::z_index(props.index));

    html! {
        <div class="bubble-item-wrapper" style={style}>
            <div class="bubble-inner">
                <div class="hover-card">
                    <div class="hover-card-body">
                        <div class={classes!("hover-card-chip", bubble.gradient)}>
                            { icon_svg(bubble.icon, bubble.icon_color, 16) }
                        </div>
                        <div class="hover-card-text">
                            <h3>{ bubble.title }</h3>
                            <p>{ bubble.description }</p>
                        </div>
                    </div>
                </div>
                <div class={classes!("bubble", bubble.gradient)}>
                    { icon_svg(bubble.icon, bubble.icon_color, 22) }
                </div>
            </div>
        </div>
    }
}

fn hero_css() -> String {
    let wide = THEME.breakpoint("2md").unwrap_or(768);
    let lg = THEME.breakpoint("lg").unwrap_or(1024);
    let xl = THEME.breakpoint("xl").unwrap_or(1280);
    let xxl = THEME.breakpoint("2xl").unwrap_or(1536);
    let primary = THEME.color("primary", 6000).unwrap_or("#ef233c");
    let dark = |role| THEME.dark_color(role).unwrap_or("inherit");
    let (heading, subtitle, surface, border) =
        (dark("heading"), dark("subtitle"), dark("surface"), dark("border"));
    let (text, muted, bubble, bubble_border) =
        (dark("text"), dark("muted"), dark("bubble"), dark("bubble-border"));

    let mut css = String::from(
        r#"
        .hero-wrapper {
            position: relative;
            height: 100vh;
        }
        .skip-link {
            position: absolute;
            left: -9999px;
        }
        .skip-link:focus {
            left: 1rem;
            top: 1rem;
            padding: 0.5rem 1rem;
            color: #fff;
            border-radius: 6px;
            z-index: 50;
        }
        .hero-stage {
            position: relative;
            width: 100%;
            height: 100%;
            overflow: hidden;
            z-index: 10;
        }
        .hero-backdrop {
            position: absolute;
            inset: 0;
            overflow: hidden;
            z-index: 0;
        }
        .blur-track {
            position: absolute;
            will-change: transform;
        }
        .blur-left { top: 5rem; left: 5rem; }
        .blur-right { top: 10rem; right: 5rem; }
        .blur-element {
            border-radius: 9999px;
            filter: blur(64px);
            opacity: 0.1;
            mix-blend-mode: multiply;
            animation: blurIn 1.8s ease-out both;
        }
        .blur-left .blur-element { width: 24rem; height: 24rem; }
        .blur-right .blur-element { width: 20rem; height: 20rem; animation-delay: 0.3s; }
        .hero-content {
            position: absolute;
            inset: 0;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            text-align: center;
            padding: 0 1rem;
        }
        .hero-column {
            position: absolute;
            top: 40%;
            width: 100%;
        }
        .hero-text {
            animation: heroTextIn 1.2s cubic-bezier(0.215, 0.61, 0.355, 1) 0.3s both;
        }
        .hero-heading {
            font-size: 48px;
            font-weight: 600;
            line-height: 48px;
            letter-spacing: -0.025em;
            padding-bottom: 1.5rem;
            color: #1e1e1e;
            min-height: 90px;
            margin: 0;
        }
        .typed { display: inline-block; }
        .cursor {
            display: inline-block;
            margin-left: 0.25rem;
            transition: opacity 100ms;
        }
        .cursor-on { opacity: 1; }
        .cursor-off { opacity: 0; }
        .hero-subtitle {
            font-size: 16px;
            font-weight: 500;
            line-height: 1.4;
            color: #0000008a;
            max-width: 48rem;
            margin: 0 auto 2rem auto;
            padding: 0 1.25rem;
        }
        .wide-only { display: none; }
        .hero-button {
            display: flex;
            justify-content: center;
            position: relative;
            animation: heroButtonIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) 0.8s both;
        }
        .hero-cta {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            border-radius: 9999px;
            font-size: 16px;
            font-weight: 500;
            padding: 14px 24px;
            width: 240px;
            height: 52px;
            box-sizing: border-box;
            background: #0284c7;
            color: #fff;
            text-decoration: none;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            transition: all 300ms;
            z-index: 1000;
        }
        .hero-cta:hover { background: #0369a1; transform: scale(1.05); }
        .hero-cta:active { transform: scale(0.95); }
        .hero-cta-chevron { margin-left: 0.5rem; width: 1rem; height: 1rem; }
        .bubble-item-wrapper {
            position: absolute;
            top: 50%;
            left: 50%;
            will-change: transform;
        }
        .bubble-inner { position: relative; z-index: 0; }
        .bubble {
            position: relative;
            width: 64px;
            height: 64px;
            box-sizing: border-box;
            padding: 14px;
            border-radius: 9999px;
            display: flex;
            align-items: center;
            justify-content: center;
            cursor: pointer;
            backdrop-filter: blur(16px);
            border: 1px solid rgba(255, 255, 255, 0.3);
            box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
            transition: all 300ms cubic-bezier(0.4, 0, 0.2, 1);
        }
        .bubble-item-wrapper:hover .bubble {
            transform: scale(1.1);
            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
            background: rgba(255, 255, 255, 0.95);
        }
        .bubble-item-wrapper:active .bubble { transform: scale(0.95); }
        .hover-card {
            position: absolute;
            top: 100%;
            left: 50%;
            margin-top: 0.75rem;
            opacity: 0;
            transform: translateX(-50%) scale(0.95);
            transition: all 200ms;
            pointer-events: none;
            z-index: 50;
        }
        .bubble-item-wrapper:hover .hover-card {
            opacity: 1;
            transform: translateX(-50%) scale(1);
        }
        .hover-card-body {
            display: flex;
            align-items: flex-start;
            gap: 0.5rem;
            background: #fff;
            border: 1px solid #e5e7eb;
            border-radius: 0.5rem;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            padding: 0.75rem;
            min-width: 240px;
            max-width: 280px;
            text-align: left;
        }
        .hover-card-chip {
            flex-shrink: 0;
            width: 1.5rem;
            height: 1.5rem;
            border-radius: 9999px;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .hover-card-text h3 { font-size: 0.75rem; font-weight: 600; color: #111827; margin: 0 0 0.25rem 0; }
        .hover-card-text p { font-size: 10px; line-height: 1.6; color: #4b5563; margin: 0; }
        .gradient-indigo { background: linear-gradient(to right, rgba(255,255,255,0.7), #eef2ff); }
        .gradient-emerald { background: linear-gradient(to right, rgba(255,255,255,0.7), #ecfdf5); }
        .gradient-amber { background: linear-gradient(to right, rgba(255,255,255,0.7), #fffbeb); }
        .gradient-blue { background: linear-gradient(to right, rgba(255,255,255,0.7), #eff6ff); }
        .gradient-purple { background: linear-gradient(to right, rgba(255,255,255,0.7), #faf5ff); }
        .gradient-teal { background: linear-gradient(to right, rgba(255,255,255,0.7), #f0fdfa); }
        .gradient-cyan { background: linear-gradient(to right, rgba(255,255,255,0.7), #ecfeff); }
        .gradient-pink { background: linear-gradient(to right, rgba(255,255,255,0.7), #fdf2f8); }
        .gradient-yellow { background: linear-gradient(to right, rgba(255,255,255,0.7), #fefce8); }
        .gradient-red { background: linear-gradient(to right, rgba(255,255,255,0.7), #fef2f2); }
        .gradient-rose { background: linear-gradient(to right, rgba(255,255,255,0.7), #fff1f2); }
        .gradient-slate { background: linear-gradient(to right, rgba(255,255,255,0.7), #f8fafc); }
        .icon-indigo { color: #4f46e5; }
        .icon-green { color: #16a34a; }
        .icon-orange { color: #ea580c; }
        .icon-blue { color: #2563eb; }
        .icon-purple { color: #9333ea; }
        .icon-teal { color: #0d9488; }
        .icon-cyan { color: #0891b2; }
        .icon-pink { color: #db2777; }
        .icon-yellow { color: #ca8a04; }
        .icon-red { color: #dc2626; }
        .icon-rose { color: #e11d48; }
        .icon-slate { color: #475569; }
        .scroll-test-area {
            position: relative;
            width: 100%;
            height: 100vh;
            background: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
        }
        .scroll-test-area h2 { font-size: 1.5rem; font-weight: 600; color: #4b5563; margin-bottom: 1rem; }
        .scroll-test-area p { color: #6b7280; }
        "#,
    );

    css.push_str(&format!(
        r#"
        .skip-link:focus {{ background: {primary}; }}
        @media (min-width: {wide}px) {{
            .hero-heading {{ min-height: 120px; }}
            .hero-subtitle {{ padding: 0; margin-bottom: 4rem; }}
            .wide-only {{ display: block; }}
        }}
        @media (min-width: {lg}px) {{
            .hero-wrapper {{ height: 200vh; }}
            .hero-column {{ top: 35%; }}
            .hero-heading {{ min-height: 150px; }}
        }}
        @media (min-width: {xl}px) {{
            .hero-column {{ top: 32%; }}
            .hero-heading {{ min-height: 180px; }}
        }}
        @media (min-width: {xxl}px) {{
            .hero-column {{ top: 30%; }}
        }}
        @media (prefers-color-scheme: dark) {{
            .hero-heading {{ color: {heading}; }}
            .hero-subtitle {{ color: {subtitle}; }}
            .bubble {{ background: linear-gradient(to right, {bubble}, transparent); border-color: {bubble_border}; }}
            .hover-card-body {{ background: {surface}; border-color: {border}; }}
            .hover-card-text h3 {{ color: {text}; }}
            .hover-card-text p {{ color: {muted}; }}
        }}
        "#
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_styles(progress: f64) -> Vec<String> {
        BUBBLES
            .iter()
            .enumerate()
            .map(|(index, bubble)| bubble.frame(progress).to_style(Bubble::z_index(index)))
            .collect()
    }

    #[test]
    fn top_of_page_places_bubbles_at_start() {
        let styles = rendered_styles(0.0);
        assert_eq!(styles.len(), 12);
        assert_eq!(
            styles[0],
            "transform: translateX(-280px) translateY(-200px) scale(0.5); opacity: 0.4; z-index: 50;"
        );
        assert_eq!(
            styles[11],
            "transform: translateX(130px) translateY(60px) scale(0.6); opacity: 0.6; z-index: -5;"
        );
    }

    #[test]
    fn fully_scrolled_places_bubbles_at_end() {
        let styles = rendered_styles(1.0);
        assert_eq!(
            styles[0],
            "transform: translateX(-140px) translateY(-100px) scale(0.8); opacity: 0.8; z-index: 50;"
        );
        assert_eq!(
            styles[8],
            "transform: translateX(-5px) translateY(240px) scale(1); opacity: 1; z-index: 10;"
        );
    }

    #[test]
    fn hero_texts_are_two_lines_each() {
        for text in HERO_TEXTS {
            assert_eq!(text.lines().count(), 2, "{}", text);
        }
    }

    #[test]
    fn hero_layers_shift_in_opposite_directions() {
        assert_eq!(shift_y_style(&BACKGROUND_SHIFT, 1.0), "transform: translateY(50%);");
        assert_eq!(shift_y_style(&TEXT_SHIFT, 1.0), "transform: translateY(-20%);");
    }

    #[test]
    fn backdrop_shift_rides_on_the_track_not_the_animated_blob() {
        for layer in backdrop_layers(1.0) {
            assert_eq!(layer.track_style, "transform: translateY(50%);");
            assert!(!layer.blob_style.contains("transform"), "{}", layer.blob_style);
        }
        let [left, right] = backdrop_layers(0.0);
        assert_eq!(left.side, "blur-left");
        assert_eq!(left.blob_style, "background: #ef233c;");
        assert_eq!(right.blob_style, "background: #04868b;");
        assert_eq!(left.track_style, "transform: translateY(0%);");
    }

    #[test]
    fn hero_css_covers_wide_screens_and_dark_mode() {
        let css = hero_css();
        assert!(css.contains("@media (min-width: 1280px)"));
        assert!(css.contains(".hero-column { top: 32%; }"));
        assert!(css.contains(".hero-heading { min-height: 180px; }"));
        assert!(css.contains("@media (min-width: 1536px)"));
        assert!(css.contains(".hero-column { top: 30%; }"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains(".hero-heading { color: #e6e6e6; }"));
        assert!(css.contains(".hover-card-body { background: #1f2937; border-color: #4b5563; }"));
    }

    #[test]
    fn hero_css_does_not_depend_on_render_state() {
        assert_eq!(hero_css(), hero_css());
        assert!(!hero_css().contains("translateY(50%)"));
    }
}
