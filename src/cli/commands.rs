use std::io::{self, Write};

use serde::Serialize;

use crate::app::{AppContext, CatalogError, Result};
use crate::domain::Product;

pub async fn list_products(ctx: &AppContext, json: bool) -> Result<()> {
    let products = ctx.catalog.list_all().await?;
    print_products(&products, json)
}

pub async fn search(ctx: &AppContext, term: &str, json: bool) -> Result<()> {
    let products = ctx.catalog.search(term).await?;

    if products.is_empty() && !json {
        println!("No products match \"{}\"", term);
        return Ok(());
    }

    print_products(&products, json)
}

pub async fn show_product(ctx: &AppContext, index: i64, json: bool) -> Result<()> {
    let product = ctx.catalog.by_index(index).await?;

    if json {
        return print_json(&product);
    }

    println!("{}", product.display_title());
    println!("  Category: {}", product.category());
    if !product.link().is_empty() {
        println!("  Link:     {}", product.link());
    }
    if !product.summary().is_empty() {
        println!();
        println!("{}", product.summary());
    }
    Ok(())
}

pub async fn list_categories(ctx: &AppContext, json: bool) -> Result<()> {
    let categories = ctx.catalog.list_categories().await?;

    if json {
        #[derive(Serialize)]
        struct Categories {
            categories: Vec<String>,
        }
        return print_json(&Categories { categories });
    }

    if categories.is_empty() {
        println!("No categories");
        return Ok(());
    }

    for category in categories {
        println!("{}", category);
    }
    Ok(())
}

pub async fn list_category(ctx: &AppContext, name: &str, json: bool) -> Result<()> {
    let products = ctx.catalog.by_category(name).await?;
    print_products(&products, json)
}

fn print_products(products: &[Product], json: bool) -> Result<()> {
    if json {
        return print_json(&products);
    }

    if products.is_empty() {
        println!("No products");
        return Ok(());
    }

    for product in products {
        println!("- {} ({})", product.display_title(), product.category());
        if !product.link().is_empty() {
            println!("    {}", product.link());
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| CatalogError::Unexpected(e.to_string()))?;
    writeln!(out).map_err(|e| CatalogError::Unexpected(e.to_string()))?;
    Ok(())
}
