use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
    }
}

/// Theme comes from `DOMAIN_CHAT_THEME`; anything but `light` means dark.
pub fn theme_from_env() -> ThemeMode {
    match std::env::var("DOMAIN_CHAT_THEME") {
        Ok(value) if value.trim().eq_ignore_ascii_case("light") => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0d10;
    --color-bg-surface: #14171c;
    --color-text-primary: #f2f4f7;
    --color-text-muted: #8b939e;
    --color-border: #262b33;
    --color-bubble-user-bg: #3b82f6;
    --color-bubble-user-text: #ffffff;
    --color-bubble-bot-bg: #1e232b;
    --color-bubble-bot-text: #e5e9ef;
    --color-error-bg: #2a1214;
    --color-error-text: #f87171;
    --color-input-bg: #0f1216;
    --color-input-border: #2a3039;
    --color-send-bg: #3b82f6;
    --color-send-text: #ffffff;
    --color-send-disabled: #394150;
    --color-spinner: #8b939e;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-surface: #f7f8fa;
    --color-text-primary: #111827;
    --color-text-muted: #6b7280;
    --color-border: #d1d5db;
    --color-bubble-user-bg: #3b82f6;
    --color-bubble-user-text: #ffffff;
    --color-bubble-bot-bg: #e5e7eb;
    --color-bubble-bot-text: #1f2937;
    --color-error-bg: #fef2f2;
    --color-error-text: #dc2626;
    --color-input-bg: #ffffff;
    --color-input-border: #d1d5db;
    --color-send-bg: #3b82f6;
    --color-send-text: #ffffff;
    --color-send-disabled: #9ca3af;
    --color-spinner: #6b7280;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
