//! Two-column card: avatar on the left, labeled fields on the right.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, PrintStyledContent, ResetColor, SetAttribute, Stylize,
};
use crossterm::terminal::{Clear, ClearType};

use crate::profile::Profile;
use crate::stats::format_number;

/// Cells reserved for the avatar column.
pub const AVATAR_WIDTH: u16 = 26;
const GUTTER: u16 = 2;
pub const INFO_COL: u16 = AVATAR_WIDTH + GUTTER;

/// Screen row of the header line.
pub const ORIGIN_ROW: u16 = 2;
const DIVIDER_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 14;
const BIO_MAX: usize = 30;
const WEBSITE_MAX: usize = 25;

/// Terminal handle all card output goes through.
pub struct Screen<W: Write> {
    out: W,
}

impl Screen<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub color: Color,
}

fn row(icon: &'static str, label: &'static str, value: String, color: Color) -> InfoRow {
    InfoRow {
        icon,
        label,
        value,
        color,
    }
}

/// Keeps the first `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// The eleven fixed rows, then bio and website when they have content.
pub fn info_rows(p: &Profile) -> Vec<InfoRow> {
    let mut rows = vec![
        row("🆔", "User ID", p.id.to_string(), Color::Red),
        row("👤", "Username", p.username.clone(), Color::Green),
        row("🏢", "Company", p.company.clone(), Color::Yellow),
        row("📍", "Location", p.location.clone(), Color::Blue),
        row("💻", "Primary Lang", p.language.clone(), Color::Magenta),
        row("📚", "Repositories", format_number(p.repos), Color::Cyan),
        row("👥", "Followers", format_number(p.followers), Color::Red),
        row("👤", "Following", format_number(p.following), Color::Green),
        row("⭐", "Total Stars", format_number(p.stars), Color::Yellow),
        row("📈", "Contributions", format_number(p.contributions), Color::Blue),
        row("🗓️", "Joined", p.joined.clone(), Color::Magenta),
    ];

    if !p.bio.trim().is_empty() {
        rows.push(row("💬", "Bio", truncate(&p.bio, BIO_MAX), Color::Cyan));
    }
    if !p.blog.trim().is_empty() {
        rows.push(row("🌐", "Website", truncate(&p.blog, WEBSITE_MAX), Color::Blue));
    }

    rows
}

fn label_cell(label: &str) -> String {
    format!("{:<w$.w$}", label, w = LABEL_WIDTH)
}

fn screen_row(offset: usize) -> u16 {
    u16::try_from(ORIGIN_ROW as usize + offset).unwrap_or(u16::MAX)
}

/// Draws the card and leaves the cursor below it. Returns the card height
/// in rows.
pub fn render<W: Write>(
    screen: &mut Screen<W>,
    profile: &Profile,
    avatar: &[String],
) -> io::Result<usize> {
    let out = &mut screen.out;
    let rows = info_rows(profile);

    queue!(
        out,
        MoveTo(INFO_COL, ORIGIN_ROW),
        PrintStyledContent(profile.header_name().bold().green()),
        PrintStyledContent("@".white()),
        PrintStyledContent("github".bold().blue()),
        MoveTo(INFO_COL, ORIGIN_ROW + 1),
        PrintStyledContent("─".repeat(DIVIDER_WIDTH).dim()),
    )?;

    let height = avatar.len().max(rows.len() + 2);
    for i in 0..height {
        if let Some(line) = avatar.get(i) {
            queue!(
                out,
                MoveTo(0, screen_row(i)),
                Print(line),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }

        if let Some(info) = i.checked_sub(2).and_then(|j| rows.get(j)) {
            queue!(
                out,
                MoveTo(INFO_COL, screen_row(i)),
                PrintStyledContent(info.icon.with(info.color)),
                Print(" "),
                PrintStyledContent(label_cell(info.label).bold().white()),
                Print(" "),
                Print(&info.value),
            )?;
        }
    }

    queue!(out, MoveTo(0, screen_row(height + 2)), Print("\n"))?;
    out.flush()?;
    Ok(height)
}
