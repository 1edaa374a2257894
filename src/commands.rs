//! Subcommand execution: list, show, facets.
//!
//! Human-readable output goes to stdout with colors; `--json` prints plain
//! `serde_json` instead. Diagnostics always go through `log!` (stderr).

use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{Write, stdout};

use crate::{
    cli::{Cli, Commands, ListArgs},
    config::FolioConfig,
    content::{ContentKind, ContentStore, Facet, Metadata, Record},
    library::Library,
    log,
    query::{DateRange, Filters, ListQuery},
};

/// Run the subcommand selected on the command line.
pub fn run(cli: &Cli, config: &FolioConfig) -> Result<()> {
    let library = Library::from_config(config);

    match &cli.command {
        Commands::List { kind, args } => match kind {
            ContentKind::Posts => list(&library.posts, args, config),
            ContentKind::Papers => list(&library.papers, args, config),
            ContentKind::Projects => list(&library.projects, args, config),
        },
        Commands::Show { kind, slug, json } => match kind {
            ContentKind::Posts => show(&library.posts, slug, *json),
            ContentKind::Papers => show(&library.papers, slug, *json),
            ContentKind::Projects => show(&library.projects, slug, *json),
        },
        Commands::Facets { kind, facet } => match kind {
            ContentKind::Posts => facets(&library.posts, *facet),
            ContentKind::Papers => facets(&library.papers, *facet),
            ContentKind::Projects => facets(&library.projects, *facet),
        },
    }
}

/// Translate `list` arguments into a query.
pub fn list_query(args: &ListArgs, config: &FolioConfig) -> Result<ListQuery> {
    let filters = Filters {
        category: args.category.clone(),
        status: args.status.clone(),
        label: args.tag.clone(),
        date_range: DateRange::parse(args.from.as_deref(), args.to.as_deref())?,
    };
    let per_page = args.per_page.unwrap_or(config.pagination.per_page);

    let mut query = ListQuery::new(args.page, per_page).with_filters(filters);
    if let Some(search) = &args.search {
        query = query.with_search(search.as_str());
    }
    Ok(query)
}

fn list<M: Metadata>(store: &ContentStore<M>, args: &ListArgs, config: &FolioConfig) -> Result<()> {
    let query = list_query(args, config)?;
    report_loaded(store);
    let page = store.paginated(&query);

    let mut out = stdout().lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
        return Ok(());
    }

    if page.items.is_empty() {
        if page.total_items == 0 {
            log!("query"; "no {} match the given filters", M::KIND.name());
        } else {
            log!("query"; "page {} is past the last page ({})", page.current_page, page.total_pages);
        }
        return Ok(());
    }

    for item in &page.items {
        let meta = item.meta();
        writeln!(
            out,
            "{}  {}  {}",
            meta.date().to_string().dimmed(),
            item.title().bold(),
            format!("[{}]", meta.category()).cyan()
        )?;
        writeln!(out, "            {}", item.slug().dimmed())?;
    }

    let numbers = page.page_numbers(config.pagination.max_visible);
    writeln!(
        out,
        "\n{}  page {} of {}, {} {}",
        format_page_numbers(&numbers, page.current_page),
        page.current_page,
        page.total_pages,
        page.total_items,
        M::KIND.name()
    )?;
    Ok(())
}

fn show<M: Metadata>(store: &ContentStore<M>, slug: &str, json: bool) -> Result<()> {
    let Some(doc) = store.get_by_slug(slug) else {
        bail!("no {} with slug `{}`", M::KIND.name(), slug);
    };

    let mut out = stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(doc)?)?;
        return Ok(());
    }

    writeln!(out, "{}", doc.title().bold())?;
    writeln!(out, "{}", format!("{} · {}", doc.id, doc.meta.date()).dimmed())?;
    write!(out, "{}", serde_yaml::to_string(&doc.meta)?)?;
    writeln!(out, "---")?;
    write!(out, "{}", doc.body)?;
    Ok(())
}

fn facets<M: Metadata>(store: &ContentStore<M>, facet: Facet) -> Result<()> {
    report_loaded(store);
    let mut out = stdout().lock();
    for value in store.distinct_values(facet) {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

fn report_loaded<M: Metadata>(store: &ContentStore<M>) {
    let loaded = store.load_all().len();
    let total = store.source_count();
    if loaded < total {
        log!("content"; "loaded {} of {} {} ({} skipped)", loaded, total, M::KIND.name(), total - loaded);
    }
}

/// Render a page selector, e.g. `1 2 [3] 4 5`.
pub fn format_page_numbers(numbers: &[usize], current: usize) -> String {
    numbers
        .iter()
        .map(|&n| {
            if n == current {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_page_numbers() {
        assert_eq!(format_page_numbers(&[1, 2, 3, 4, 5], 3), "1 2 [3] 4 5");
        assert_eq!(format_page_numbers(&[1], 1), "[1]");
        assert_eq!(format_page_numbers(&[], 1), "");
    }

    #[test]
    fn test_list_query_uses_config_page_size() {
        let mut config = FolioConfig::default();
        config.pagination.per_page = 4;
        let args = ListArgs {
            page: 2,
            category: Some("research".to_string()),
            search: Some("graph".to_string()),
            from: Some("2020".to_string()),
            ..ListArgs::default()
        };

        let query = list_query(&args, &config).unwrap();
        assert_eq!(query.page.page(), 2);
        assert_eq!(query.page.per_page(), 4);
        assert_eq!(query.filters.category.as_deref(), Some("research"));
        assert_eq!(query.search.as_deref(), Some("graph"));
        assert!(query.filters.date_range.start.is_some());
        assert!(query.filters.date_range.end.is_none());
    }

    #[test]
    fn test_list_query_explicit_page_size_wins() {
        let args = ListArgs {
            page: 1,
            per_page: Some(20),
            ..ListArgs::default()
        };
        let query = list_query(&args, &FolioConfig::default()).unwrap();
        assert_eq!(query.page.per_page(), 20);
    }

    #[test]
    fn test_list_query_rejects_bad_date() {
        let args = ListArgs {
            to: Some("yesterday".to_string()),
            ..ListArgs::default()
        };
        assert!(list_query(&args, &FolioConfig::default()).is_err());
    }

    #[test]
    fn test_show_missing_slug_is_error() {
        let store: ContentStore<crate::content::PostMeta> = ContentStore::from_raw(Vec::new());
        let err = show(&store, "nope", true).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
