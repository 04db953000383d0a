use crate::model::Article;
use crate::ui::{theme, Icons, Role};

pub fn header(text: &str) {
    println!("{} {}", Icons::ROCKET, theme().paint(Role::Masthead, text));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, theme().paint(Role::Done, label));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, theme().paint(Role::Failed, label));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, theme().paint(Role::Caution, label));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        theme().paint(Role::Accent, Icons::INFO),
        theme().paint(Role::Label, label),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", theme().paint(Role::Masthead, title));
}

pub fn dim(text: &str) -> String {
    theme().paint(Role::Label, text)
}

pub fn muted(text: &str) -> String {
    theme().paint(Role::Aside, text)
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", theme().paint(Role::Label, label), value);
}

/// One-line summary of an article: title, slug, author, category.
pub fn article_line(article: &Article) -> String {
    let theme = theme();
    let star = if article.is_featured { Icons::STAR } else { " " };
    format!(
        "{} {} {}\n   {} {}  {} {}  {} {} min",
        star,
        theme.paint(Role::Headline, &article.title),
        muted(&format!("({})", article.slug)),
        Icons::PERSON,
        theme.paint(Role::Byline, &article.author.name),
        Icons::FOLDER,
        theme.paint(Role::Section, &article.category.name),
        Icons::CLOCK,
        article.reading_time,
    )
}
