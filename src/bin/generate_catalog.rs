use std::path::PathBuf;

use clap::Parser;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use outfit_api::models::{ClothingItem, ClothingType, Occasion, Season};

/// Demo palette as (hex, display name)
const PALETTE: [(&str, &str); 18] = [
    ("#FF0000", "Red"),
    ("#00FF00", "Green"),
    ("#0000FF", "Blue"),
    ("#FFFF00", "Yellow"),
    ("#FF00FF", "Magenta"),
    ("#00FFFF", "Cyan"),
    ("#000000", "Black"),
    ("#FFFFFF", "White"),
    ("#808080", "Gray"),
    ("#800000", "Maroon"),
    ("#808000", "Olive"),
    ("#008000", "Dark Green"),
    ("#800080", "Purple"),
    ("#008080", "Teal"),
    ("#000080", "Navy"),
    ("#FFA500", "Orange"),
    ("#A52A2A", "Brown"),
    ("#FFC0CB", "Pink"),
];

const BRANDS: [&str; 12] = [
    "Nike",
    "Adidas",
    "Zara",
    "H&M",
    "Mango",
    "Lacoste",
    "Tommy Hilfiger",
    "Levi's",
    "Calvin Klein",
    "LCW",
    "DeFacto",
    "Koton",
];

const SEASON_SETS: [&[Season]; 7] = [
    &[Season::Winter],
    &[Season::Spring],
    &[Season::Summer],
    &[Season::Fall],
    &[Season::Winter, Season::Fall],
    &[Season::Spring, Season::Summer],
    &[Season::All],
];

const OCCASIONS: [Occasion; 4] = [
    Occasion::Casual,
    Occasion::Formal,
    Occasion::Sport,
    Occasion::Special,
];

/// Generates a random demo wardrobe catalog
#[derive(Debug, Parser)]
#[command(name = "generate_catalog", version)]
struct Args {
    /// Number of items to generate
    #[arg(long, default_value_t = 200)]
    count: usize,

    /// Number of distinct owners (user1..userN)
    #[arg(long, default_value_t = 10)]
    owners: usize,

    /// Output file
    #[arg(long, env = "CATALOG_PATH", default_value = "data/clothing_items.json")]
    output: PathBuf,

    /// Seed for reproducible catalogs
    #[arg(long)]
    seed: Option<u64>,
}

fn name_prefixes(item_type: ClothingType) -> &'static [&'static str] {
    match item_type {
        ClothingType::TShirt => &["Relaxed", "Sport", "Everyday", "Printed", "Plain"],
        ClothingType::Shirt => &["Striped", "Checked", "Classic", "Oxford", "Long-sleeve"],
        ClothingType::Blouse => &["Silk", "Floral", "Lace", "Patterned", "Elegant"],
        ClothingType::Sweater => &["Chunky", "Fine-knit", "Turtleneck", "V-neck", "Wool"],
        ClothingType::Jacket => &["Denim", "Leather", "Light", "Waterproof", "Bomber"],
        ClothingType::Coat => &["Long", "Wool", "Winter", "Trench", "Padded"],
        ClothingType::Jeans => &["Skinny", "Regular", "Straight", "High-rise", "Ripped"],
        ClothingType::Pants => &["Pleated", "Chino", "Slim-fit", "Jogger", "Tailored"],
        ClothingType::Shorts => &["Denim", "Sport", "Beach", "Bermuda", "Cargo"],
        ClothingType::Skirt => &["Mini", "Midi", "Maxi", "Pleated", "Pencil"],
        ClothingType::Dress => &["Summer", "Cocktail", "Day", "Midi", "Maxi"],
        ClothingType::Shoes => &["Running", "Classic", "Canvas", "Oxford", "Loafer"],
        ClothingType::Boots => &["Winter", "Rain", "Combat", "Chelsea", "Heeled"],
        _ => &["Basic"],
    }
}

fn generate_item<R: Rng + ?Sized>(index: usize, owners: usize, rng: &mut R) -> anyhow::Result<ClothingItem> {
    let item_type = *ClothingType::GARMENTS
        .choose(rng)
        .ok_or_else(|| anyhow::anyhow!("empty garment list"))?;

    let color_count = rng.gen_range(1..=3);
    let colors: Vec<(&str, &str)> = (0..color_count)
        .filter_map(|_| PALETTE.choose(rng).copied())
        .collect();
    let prefix = name_prefixes(item_type).choose(rng).copied().unwrap_or_default();
    let name = format!("{} {} {}", prefix, colors[0].1, item_type.as_str());

    let seasons = SEASON_SETS.choose(rng).copied().unwrap_or(&[Season::All]);
    let owner = format!("user{}", rng.gen_range(1..=owners.max(1)));

    let mut item = ClothingItem::new(
        owner,
        name,
        item_type,
        colors.iter().map(|(hex, _)| hex.to_string()).collect(),
        seasons.iter().copied(),
    )?
    .with_occasion(*OCCASIONS.choose(rng).unwrap_or(&Occasion::Casual));

    // roughly one item in thirteen has no brand
    if rng.gen_ratio(12, 13) {
        if let Some(brand) = BRANDS.choose(rng) {
            item = item.with_brand(*brand);
        }
    }
    item.image_url = Some(format!("https://picsum.photos/200/300?random={}", index));

    Ok(item)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let items = (0..args.count)
        .map(|i| generate_item(i, args.owners, &mut rng))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.output, serde_json::to_string_pretty(&items)?)?;

    tracing::info!(
        items = items.len(),
        owners = args.owners,
        output = %args.output.display(),
        "Catalog written"
    );
    Ok(())
}
