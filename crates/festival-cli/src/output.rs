//! Table and detail rendering in the active language.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use festival_client::ApiConfig;
use festival_model::{
    Article, Comment, DetailEntry, FestivalEdition, Language, Show, TextOrList,
};

pub fn print_festivals(editions: &[FestivalEdition], language: Language) {
    let mut table = new_table(vec!["ID", "Year", "Title", "Dates", "Shows", "Articles"]);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for edition in editions {
        table.add_row(vec![
            Cell::new(&edition.id),
            Cell::new(edition.year).add_attribute(Attribute::Bold),
            Cell::new(edition.title.get(language)),
            Cell::new(date_range(
                edition.start_date.as_deref(),
                edition.end_date.as_deref(),
            )),
            Cell::new(edition.total_shows),
            Cell::new(edition.total_articles),
        ]);
    }
    println!("{table}");
}

pub fn print_festival(edition: &FestivalEdition, language: Language) {
    println!(
        "{} ({})",
        edition.title.get(language),
        edition.year
    );
    let dates = date_range(edition.start_date.as_deref(), edition.end_date.as_deref());
    if dates != "-" {
        println!("Dates: {dates}");
    }
    let description = edition.description.get(language);
    if !description.is_empty() {
        println!();
        println!("{description}");
    }
    print_entry_section("Organizing team", edition.organizing_team.as_deref());
    if let Some(jury) = &edition.jury_list
        && !jury.is_empty()
    {
        println!();
        println!("Jury:");
        for member in jury {
            println!("  {member}");
        }
    }
    print_entry_section("Awards", edition.awards.as_deref());
    print_entry_section("Details", edition.extra_details.as_deref());
}

pub fn print_shows(shows: &[Show], language: Language) {
    let mut table = new_table(vec!["ID", "Name", "Director", "Venue", "Date", "Status"]);
    for show in shows {
        table.add_row(vec![
            Cell::new(&show.id),
            Cell::new(show.name.get(language)).add_attribute(Attribute::Bold),
            Cell::new(&show.director),
            Cell::new(&show.venue_name),
            Cell::new(show.date.as_deref().unwrap_or("-")),
            status_cell(show),
        ]);
    }
    println!("{table}");
}

pub fn print_show(show: &Show, language: Language, config: &ApiConfig) {
    println!("{} / {}", show.name.get(language), show.director);
    println!("Venue: {}", show.venue_name);
    if let Some(date) = &show.date {
        println!("Date: {date}");
    }
    println!("Edition: {}", show.edition_year);
    println!("Reservations: {}", show.reservation_status);
    if let Some(poster) = &show.poster {
        println!("Poster: {}", config.media_url(poster));
    }
    if !show.show_description.is_empty() {
        println!();
        print_text_or_list(&show.show_description, "");
    }
    let cast_heading = show.cast_word.clone().unwrap_or_else(|| "Cast".to_string());
    print_entry_section(&cast_heading, show.cast.as_deref());
    print_entry_section("Crew", show.crew.as_deref());
    print_entry_section("Notes", show.notes.as_deref());
}

pub fn print_articles(articles: &[Article], language: Language) {
    let mut table = new_table(vec!["ID", "Title", "Author", "Year", "Published"]);
    align_column(&mut table, 3, CellAlignment::Right);
    for article in articles {
        table.add_row(vec![
            Cell::new(&article.id),
            Cell::new(article.title.get(language)).add_attribute(Attribute::Bold),
            Cell::new(article.author.as_deref().unwrap_or("-")),
            Cell::new(article.edition_year),
            Cell::new(&article.created_at),
        ]);
    }
    println!("{table}");
}

pub fn print_article(article: &Article, language: Language, config: &ApiConfig) {
    println!("{}", article.title.get(language));
    if let Some(author) = &article.author {
        println!("By {author}");
    }
    println!("Edition: {}", article.edition_year);
    for section in &article.sections {
        println!();
        println!("{section}");
    }
    if !article.attachments.is_empty() {
        println!();
        println!("Attachments:");
        for attachment in &article.attachments {
            println!("  {}", config.media_url(attachment));
        }
    }
}

pub fn print_comments(comments: &[Comment]) {
    let mut table = new_table(vec!["Author", "Comment", "Date"]);
    for comment in comments {
        table.add_row(vec![
            Cell::new(comment.author.as_deref().unwrap_or("-")),
            Cell::new(&comment.content),
            Cell::new(&comment.created_at),
        ]);
    }
    println!("{table}");
}

fn print_entry_section(heading: &str, entries: Option<&[DetailEntry]>) {
    let Some(entries) = entries else {
        return;
    };
    println!();
    println!("{heading}:");
    for entry in entries {
        print_entry(entry, 1);
    }
}

fn print_entry(entry: &DetailEntry, depth: usize) {
    let indent = "  ".repeat(depth);
    match &entry.value {
        Some(TextOrList::One(value)) => println!("{indent}{}: {value}", entry.text),
        Some(TextOrList::Many(values)) => {
            println!("{indent}{}: {}", entry.text, values.join(", "));
        }
        None => println!("{indent}{}", entry.text),
    }
    if let Some(link) = &entry.link {
        println!("{indent}  ({link})");
    }
    for child in entry.children.as_deref().unwrap_or_default() {
        print_entry(child, depth + 1);
    }
}

fn print_text_or_list(value: &TextOrList, indent: &str) {
    for text in value.texts() {
        println!("{indent}{text}");
    }
}

fn status_cell(show: &Show) -> Cell {
    let cell = Cell::new(show.reservation_status.to_string());
    if show.reservation_status.is_reservable() {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::DarkGrey)
    }
}

fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(single), None) | (None, Some(single)) => single.to_string(),
        (None, None) => "-".to_string(),
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
