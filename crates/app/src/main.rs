//! Wavecart storefront CLI

use std::{io, process, str::FromStr, time::Duration};

use clap::{Args, Parser, Subcommand};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use wavecart::{
    pricing::{discounted_unit_price, format_usd},
    products::{Product, ProductId, StarRating},
    receipt::write_cart_receipt,
    sorting::Sort,
};
use wavecart_app::{
    catalog::CatalogService as _,
    config::AppConfig,
    context::Storefront,
    notices::Notices,
    observability,
    views::{DetailState, ListingSource, ProductDetail, ProductListing, SearchBox},
};

#[derive(Debug, Parser)]
#[command(name = "wavecart", about = "Wavecart storefront CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the whole catalog
    Products(ListArgs),

    /// Show one product with its first page of reviews
    Product {
        /// Product id
        id: u64,

        /// Review page
        #[arg(long, default_value_t = 1)]
        reviews_page: u32,
    },

    /// Search products
    Search {
        /// Search terms
        query: String,
    },

    /// List categories
    Categories,

    /// List products in a category, or `all`
    Category {
        /// Category slug
        slug: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Pick a random featured product
    Highlight,

    /// Price a cart, e.g. `quote 1:2 5`
    Quote {
        /// Lines as `<id>` or `<id>:<quantity>`
        #[arg(required = true)]
        lines: Vec<QuoteLine>,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Page number
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Sort as `<price|rating|discount>[|asc|desc]`
    #[arg(long)]
    sort: Option<Sort>,
}

#[derive(Debug, Clone, Copy)]
struct QuoteLine {
    id: ProductId,
    quantity: u32,
}

impl FromStr for QuoteLine {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = value.split_once(':').unwrap_or((value, "1"));

        Ok(Self {
            id: ProductId(
                id.parse()
                    .map_err(|error| format!("invalid product id `{id}`: {error}"))?,
            ),
            quantity: quantity
                .parse()
                .map_err(|error| format!("invalid quantity `{quantity}`: {error}"))?,
        })
    }
}

#[tokio::main]
pub async fn main() {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init(&cli.config.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let storefront = Storefront::from_config(&cli.config)
        .map_err(|error| format!("failed to start storefront: {error}"))?;
    let page_size = cli.config.catalog.page_size;

    let result = match cli.command {
        Commands::Products(list) => {
            list_products(&storefront, ListingSource::All, page_size, &list).await
        }
        Commands::Category { slug, list } => {
            list_products(&storefront, ListingSource::from_slug(&slug), page_size, &list).await
        }
        Commands::Product { id, reviews_page } => {
            show_product(&storefront, ProductId(id), reviews_page).await
        }
        Commands::Search { query } => search(&storefront, &query).await,
        Commands::Categories => list_categories(&storefront).await,
        Commands::Highlight => highlight(&storefront).await,
        Commands::Quote { lines } => quote(&storefront, &lines).await,
    };

    for notice in storefront.notices.update(Notices::drain) {
        eprintln!("{notice}");
    }

    result
}

async fn list_products(
    storefront: &Storefront,
    source: ListingSource,
    page_size: u32,
    args: &ListArgs,
) -> Result<(), String> {
    let mut listing =
        ProductListing::new(source, page_size).map_err(|error| error.to_string())?;

    if let Some(sort) = args.sort {
        listing.set_sort(sort);
    }

    listing
        .load(storefront.catalog.as_ref())
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    if args.page > 1 {
        listing
            .go_to(storefront.catalog.as_ref(), args.page)
            .await
            .map_err(|error| format!("failed to load products: {error}"))?;
    }

    print_products(listing.products());

    let pagination = listing.pagination();

    println!(
        "page {} of {} ({} products)",
        pagination.page(),
        pagination.total_pages().max(1),
        pagination.total()
    );

    Ok(())
}

async fn show_product(
    storefront: &Storefront,
    id: ProductId,
    reviews_page: u32,
) -> Result<(), String> {
    let mut detail = ProductDetail::load(storefront.catalog.as_ref(), id).await;

    let product = match detail.state() {
        DetailState::Loaded(product) => product.as_ref().clone(),
        DetailState::NotFound => return Err(format!("product {id} not found")),
        DetailState::Failed(error) => return Err(format!("failed to load product {id}: {error}")),
    };

    println!("{} (#{})", product.title, product.id);
    println!("{}", product.description);
    println!(
        "{} {}  now {}",
        stars(product.stars()),
        product.rating,
        format_usd(discounted_unit_price(product.price, product.discount_percentage))
    );
    println!("{} in stock, category {}", product.stock, product.category);

    detail.go_to_review_page(reviews_page);

    for review in detail.reviews() {
        println!(
            "  {} {}: {}",
            stars(StarRating::from_rating(f64::from(review.rating))),
            review.reviewer_name,
            review.comment
        );
    }

    if detail.review_pages() > 0 {
        println!("reviews page {} of {}", detail.review_page(), detail.review_pages());
    }

    Ok(())
}

async fn search(storefront: &Storefront, query: &str) -> Result<(), String> {
    let mut search_box = SearchBox::new(
        storefront.catalog.clone(),
        storefront.notices.clone(),
        Duration::ZERO,
    );

    search_box.input(query);
    search_box.settle().await;

    print_products(&search_box.results());

    Ok(())
}

async fn list_categories(storefront: &Storefront) -> Result<(), String> {
    storefront.load_categories().await;

    storefront.categories.read(|store| {
        if let Some(error) = store.error() {
            return Err(format!("failed to load categories: {error}"));
        }

        let mut builder = Builder::default();

        builder.push_record(["Slug", "Name"]);

        for category in store.categories() {
            builder.push_record([category.slug.as_str(), category.name.as_str()]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());

        println!("{table}");

        Ok(())
    })
}

async fn highlight(storefront: &Storefront) -> Result<(), String> {
    let highlight = storefront
        .highlight(&mut rand::thread_rng())
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    match highlight {
        Some(product) => print_products(std::slice::from_ref(&product)),
        None => println!("no featured products"),
    }

    Ok(())
}

async fn quote(storefront: &Storefront, lines: &[QuoteLine]) -> Result<(), String> {
    for line in lines {
        let product = storefront
            .catalog
            .get_product(line.id)
            .await
            .map_err(|error| format!("failed to load product {}: {error}", line.id))?;

        // Rejections are reported as notices; keep pricing the other lines.
        _ = storefront.add_to_cart(&product, line.quantity);
    }

    storefront
        .cart
        .read(|cart| write_cart_receipt(&mut io::stdout().lock(), cart))
        .map_err(|error| error.to_string())
}

fn stars(rating: StarRating) -> String {
    format!(
        "{}{}{}",
        "★".repeat(usize::from(rating.full)),
        "⯪".repeat(usize::from(rating.half)),
        "☆".repeat(usize::from(rating.empty))
    )
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("no products");
        return;
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Title", "Category", "Price", "Discount", "Rating", "Stock"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.category.clone(),
            format_usd(product.price),
            product
                .discount_percentage
                .map(|discount| format!("{discount}%"))
                .unwrap_or_default(),
            stars(product.stars()),
            product.stock.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..7), Alignment::right());

    println!("{table}");
}
