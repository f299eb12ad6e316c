use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{
    DISCORD_ICON_SRC, DISCORD_INVITE_URL, LOGO_SRC, SITE_NAME, SITE_VERSION, UPLOAD_ICON_SRC,
    USER_ICON_SRC,
};
use crate::theme::THEME;

/// Hides an image whose source failed to load.
pub fn hide_broken_image() -> Callback<Event> {
    Callback::from(|e: Event| {
        if let Some(element) = e.target_dyn_into::<HtmlElement>() {
            let _ = element.style().set_property("display", "none");
        }
    })
}

#[function_component(Header)]
pub fn header() -> Html {
    let css = use_memo(|_| header_css(), ());

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <a href="/" class="brand">
                    <img src={LOGO_SRC} alt={format!("{} Logo", SITE_NAME)} class="brand-logo" onerror={hide_broken_image()} />
                    <div class="brand-text">
                        <span class="brand-name">{ SITE_NAME }</span>
                        <span class="brand-badge">{"BETA"}</span>
                        <span class="brand-version">{ SITE_VERSION }</span>
                    </div>
                </a>

                <nav class="site-nav">
                    <a href="/" class="nav-link">{"Home"}</a>
                    <div class="nav-group">
                        <button class="nav-link nav-dropdown">
                            {"Discover"}
                            <svg class="nav-chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                            </svg>
                        </button>
                    </div>
                    <a href="/features" class="nav-link">{"Features"}</a>
                    <a href="/pricing" class="nav-link">{"Pricing"}</a>
                </nav>

                <div class="header-actions">
                    <div class="search-box">
                        <input type="text" placeholder="search" class="search-input" />
                        <button class="search-button">
                            <svg class="search-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                            </svg>
                        </button>
                    </div>

                    <a href={DISCORD_INVITE_URL} class="header-action">
                        <img src={DISCORD_ICON_SRC} alt="Discord" class="action-icon" onerror={hide_broken_image()} />
                        <span>{"Discord"}</span>
                    </a>

                    <div class="header-action">
                        <img src={UPLOAD_ICON_SRC} alt="Upload" class="action-icon" onerror={hide_broken_image()} />
                        <span>{"Upload"}</span>
                    </div>

                    <button class="user-menu">
                        <img src={USER_ICON_SRC} alt="User" class="user-icon" onerror={hide_broken_image()} />
                    </button>
                </div>
            </div>
            <style>{ (*css).clone() }</style>
        </header>
    }
}

fn header_css() -> String {
    let lg = THEME.breakpoint("lg").unwrap_or(1024);
    let dark = |role| THEME.dark_color(role).unwrap_or("inherit");
    let (text, muted, surface) = (dark("text"), dark("muted"), dark("surface"));
    let (border, hover, placeholder) = (dark("border"), dark("hover"), dark("subtitle"));

    format!(
        r#"
        .site-header {{
            position: sticky;
            top: 0;
            z-index: 20;
            width: 100%;
            display: none;
            background: rgba(255, 255, 255, 0.9);
            transition: transform 300ms ease-in-out;
        }}
        @media (min-width: {lg}px) {{
            .site-header {{ display: block; }}
        }}
        .site-header-inner {{
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1rem 3.5rem;
        }}
        .brand {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
            text-decoration: none;
            transition: transform 200ms;
        }}
        .brand:hover, .header-action:hover, .user-menu:hover {{ transform: scale(1.05); }}
        .user-menu:active {{ transform: scale(0.95); }}
        .brand-logo {{ height: 2rem; width: auto; }}
        .brand-text {{ display: flex; align-items: center; gap: 0.25rem; }}
        .brand-name {{ font-size: 1.125rem; font-weight: 700; color: #111827; }}
        .brand-badge {{
            font-size: 0.75rem;
            background: #dbeafe;
            color: #1e40af;
            padding: 0.25rem 0.5rem;
            border-radius: 9999px;
            font-weight: 500;
        }}
        .brand-version {{ font-size: 0.75rem; color: #6b7280; }}
        .site-nav {{ display: flex; align-items: center; gap: 2rem; }}
        .nav-link {{
            color: #374151;
            font-weight: 500;
            text-decoration: none;
            background: none;
            border: none;
            font-size: 1rem;
            cursor: pointer;
            display: flex;
            align-items: center;
            transition: color 200ms;
        }}
        .nav-link:hover {{ color: #111827; }}
        .nav-chevron {{ margin-left: 0.25rem; width: 1rem; height: 1rem; }}
        .header-actions {{ display: flex; align-items: center; gap: 1rem; }}
        .search-box {{ position: relative; }}
        .search-input {{
            width: 8rem;
            padding: 0.5rem 0.75rem;
            font-size: 0.875rem;
            border: 1px solid #d1d5db;
            border-radius: 0.5rem;
            background: #fff;
            color: #111827;
        }}
        .search-input:focus {{ outline: none; border-color: transparent; box-shadow: 0 0 0 2px #3b82f6; }}
        .search-button {{
            position: absolute;
            right: 0.5rem;
            top: 50%;
            transform: translateY(-50%);
            background: none;
            border: none;
            padding: 0;
        }}
        .search-icon {{ width: 1rem; height: 1rem; color: #9ca3af; }}
        .header-action {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
            color: #374151;
            font-size: 0.875rem;
            font-weight: 500;
            text-decoration: none;
            cursor: pointer;
            transition: transform 200ms, color 200ms;
        }}
        .action-icon {{ width: 1.25rem; height: 1.25rem; }}
        .user-menu {{
            padding: 0.5rem;
            border-radius: 9999px;
            border: none;
            background: none;
            cursor: pointer;
            transition: transform 200ms, background 200ms;
        }}
        .user-menu:hover {{ background: #f3f4f6; }}
        .user-icon {{ width: 1.5rem; height: 1.5rem; }}
        @media (prefers-color-scheme: dark) {{
            .brand-name {{ color: {text}; }}
            .nav-link {{ color: {muted}; }}
            .nav-link:hover {{ color: {text}; }}
            .search-input {{ background: {surface}; border-color: {border}; color: {text}; }}
            .search-input::placeholder {{ color: {placeholder}; }}
            .user-menu:hover {{ background: {hover}; }}
        }}
        "#
    )
}
