// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the kbmatch CLI.
//!
//! Replies and knowledge-base listings are drawn in boxes with a OneDark
//! palette on dark terminals and One Light on light ones. `KBMATCH_THEME`
//! ("dark" or "light") overrides detection, `COLORFGBG` is the fallback hint.
//! `NO_COLOR` and non-TTY stdout turn colors off entirely.

use std::sync::OnceLock;

use kbmatch::{Document, FormattedResponse};

/// Width between the left and right border characters.
pub const BOX_WIDTH: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KBMATCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color plus modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Length on screen, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap to `width` visible characters. Words longer than a line
/// are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = if line.is_empty() { 0 } else { line.chars().count() + 1 };
        if needed + word.chars().count() > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!(
        "{b}│{r} {}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}├{r}{}{b}{}┤{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn confidence_color(confidence: f64) -> fn() -> String {
    if confidence >= 0.7 {
        GREEN
    } else if confidence >= 0.5 {
        YELLOW
    } else {
        RED
    }
}

/// Draw a reply.
pub fn print_response(query: &str, response: &FormattedResponse) {
    section_top("QUESTION");
    for line in wrap(query, BOX_WIDTH - 2) {
        row(&line);
    }

    section_mid("ANSWER");
    for line in wrap(&response.text, BOX_WIDTH - 2) {
        row(&line);
    }

    section_mid("SOURCE");
    if response.needs_admin {
        row(&themed(RED, &[BOLD], "needs admin: no page matched"));
    } else {
        if let Some(page) = &response.source_page {
            row(&format!("page        {}", page));
        }
        if let Some(url) = &response.source_url {
            row(&format!("url         {}", themed(GRAY, &[], url)));
        }
        let confidence = format!("{:.3}", response.confidence);
        row(&format!(
            "confidence  {}",
            themed(confidence_color(response.confidence), &[BOLD], &confidence)
        ));
    }
    section_bot();
}

/// Draw one line per document with its token count.
pub fn print_documents(documents: &[Document]) {
    section_top(&format!("KNOWLEDGE BASE ({} documents)", documents.len()));
    for doc in documents {
        let tokens = format!("{:>5}", doc.tokens.len());
        let tokens = if doc.tokens.is_empty() {
            themed(RED, &[], &tokens)
        } else {
            themed(GREEN, &[], &tokens)
        };
        let label = format!("{}  {}", doc.id, doc.title);
        let label: String = label.chars().take(BOX_WIDTH - 16).collect();
        row(&format!("{} tok  {}", tokens, label));
    }
    section_bot();
}

/// Print tokens one per line, dimmed index first.
pub fn print_tokens(tokens: &[String]) {
    for (i, token) in tokens.iter().enumerate() {
        println!("{} {}", themed(GRAY, &[DIM], &format!("{:>3}", i)), token);
    }
}
