use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use outfit_api::models::{ClothingItem, ClothingType, ItemId, Outfit, Season, Strategy, WeatherContext};
use outfit_api::services::classifier::{classify, Category};
use outfit_api::services::weather;
use outfit_api::services::{OutfitAssembler, RecommendationEngine};

fn item(item_type: ClothingType, colors: &[&str], seasons: &[Season]) -> ClothingItem {
    ClothingItem::new(
        "user1",
        format!("{} {}", colors[0], item_type.as_str()),
        item_type,
        colors.iter().map(|c| c.to_string()).collect(),
        seasons.iter().copied(),
    )
    .unwrap()
}

fn summer_basics() -> Vec<ClothingItem> {
    vec![
        item(ClothingType::TShirt, &["white"], &[Season::Summer]),
        item(ClothingType::Jeans, &["blue"], &[Season::All]),
        item(ClothingType::Shoes, &["black"], &[Season::All]),
    ]
}

fn mixed_wardrobe() -> Vec<ClothingItem> {
    vec![
        item(ClothingType::TShirt, &["white"], &[Season::Summer]),
        item(ClothingType::Shirt, &["blue", "white"], &[Season::Spring, Season::Fall]),
        item(ClothingType::Sweater, &["maroon"], &[Season::Winter, Season::Fall]),
        item(ClothingType::Blouse, &["pink"], &[Season::Spring]),
        item(ClothingType::Jeans, &["navy"], &[Season::All]),
        item(ClothingType::Pants, &["gray"], &[Season::Fall]),
        item(ClothingType::Shorts, &["olive"], &[Season::Summer]),
        item(ClothingType::Skirt, &["black"], &[Season::Spring, Season::Summer]),
        item(ClothingType::Dress, &["red"], &[Season::Summer]),
        item(ClothingType::Shoes, &["white"], &[Season::All]),
        item(ClothingType::Boots, &["brown"], &[Season::Winter, Season::Fall]),
        item(ClothingType::Jacket, &["navy"], &[Season::Spring, Season::Fall]),
        item(ClothingType::Coat, &["black"], &[Season::Winter]),
        item(ClothingType::Hat, &["gray"], &[Season::Winter]),
        item(ClothingType::Scarf, &["red"], &[Season::Winter, Season::Fall]),
        item(ClothingType::Accessory, &["silver"], &[Season::All]),
    ]
}

fn ids(outfit: &Outfit) -> Vec<ItemId> {
    outfit.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn test_warm_sunny_day_uses_tshirt_jeans_and_shoes() {
    let wardrobe = summer_basics();
    let weather = WeatherContext::new(28.0, "sunny");
    let engine = RecommendationEngine::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // every strategy gets a turn across the history window
    for _ in 0..8 {
        let outfit = engine.recommend(&wardrobe, &weather, &mut rng);
        let chosen: HashSet<_> = ids(&outfit).into_iter().collect();
        let expected: HashSet<_> = wardrobe.iter().map(|i| i.id.clone()).collect();
        assert_eq!(outfit.len(), 3);
        assert_eq!(chosen, expected);
    }
}

#[test]
fn test_cold_snowy_day_adds_coat() {
    let mut wardrobe = summer_basics();
    wardrobe.push(item(ClothingType::Coat, &["black"], &[Season::Winter]));
    let weather = WeatherContext::new(5.0, "snowy");
    let engine = RecommendationEngine::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    for _ in 0..8 {
        let outfit = engine.recommend(&wardrobe, &weather, &mut rng);
        assert!(outfit.iter().any(|i| i.item_type == ClothingType::Coat));
    }
}

#[test]
fn test_lone_accessory_is_recommended() {
    let wardrobe = vec![item(ClothingType::Accessory, &["silver"], &[Season::All])];
    let weather = WeatherContext::new(22.0, "clear");
    let engine = RecommendationEngine::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..8 {
        let outfit = engine.recommend(&wardrobe, &weather, &mut rng);
        assert_eq!(ids(&outfit), vec![wardrobe[0].id.clone()]);
    }
}

#[test]
fn test_empty_wardrobe_gives_empty_outfit() {
    let engine = RecommendationEngine::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let outfit = engine.recommend(&[], &WeatherContext::new(-5.0, "blizzard"), &mut rng);
    assert!(outfit.is_empty());
    assert!(engine
        .recommend_multiple(&[], &WeatherContext::new(-5.0, "blizzard"), &mut rng)
        .iter()
        .all(|r| r.items.is_empty()));
}

#[test]
fn test_cold_weather_top_is_seasonal() {
    let wardrobe = vec![
        item(ClothingType::TShirt, &["white"], &[Season::Summer]),
        item(ClothingType::Blouse, &["pink"], &[Season::Spring]),
        item(ClothingType::Sweater, &["maroon"], &[Season::Winter]),
        item(ClothingType::Shirt, &["blue"], &[Season::Fall]),
        item(ClothingType::Jeans, &["navy"], &[Season::All]),
    ];
    let assembler = OutfitAssembler::default();

    for seed in 0..30 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let temperature = -10.0 + seed as f64 / 2.0;
        let weather = WeatherContext::new(temperature, "overcast");
        let candidates = weather::filter(&wardrobe, &weather);
        let outfit = assembler
            .assemble(&candidates, &weather, Strategy::WeatherFocused, &mut rng)
            .unwrap();

        let top = outfit
            .iter()
            .find(|i| classify(i) == Category::MainTop)
            .expect("a top is available");
        assert!(top.has_any_season(&[Season::Winter, Season::Fall]));
    }
}

#[test]
fn test_invariants_hold_for_every_strategy() {
    let wardrobe = mixed_wardrobe();
    let assembler = OutfitAssembler::default();
    let conditions = ["sunny", "light rain", "snow", "cloudy", "storm"];

    for seed in 0..200u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let weather = WeatherContext::new(
            -5.0 + (seed % 40) as f64,
            conditions[(seed % 5) as usize],
        );
        let candidates = weather::filter(&wardrobe, &weather);
        let has_accessories = candidates
            .iter()
            .any(|i| classify(i) == Category::Accessory);

        for strategy in Strategy::ALL {
            let outfit = assembler
                .assemble(&candidates, &weather, strategy, &mut rng)
                .unwrap();

            let unique: HashSet<_> = ids(&outfit).into_iter().collect();
            assert_eq!(unique.len(), outfit.len(), "duplicate item under {}", strategy);

            if has_accessories {
                assert!(outfit.iter().any(|i| classify(i) == Category::Accessory));
            }

            let categories: Vec<Category> = outfit.iter().map(classify).collect();
            let dress = categories.contains(&Category::Dress);
            let separates = categories
                .iter()
                .any(|c| matches!(c, Category::MainTop | Category::MainBottom));
            assert!(!(dress && separates), "dress worn with separates under {}", strategy);

            if !weather::needs_outerwear(&weather) {
                assert!(!categories.contains(&Category::Outerwear));
            }
        }
    }
}

#[test]
fn test_same_seed_same_outfit() {
    let wardrobe = mixed_wardrobe();
    let weather = WeatherContext::new(8.0, "rain");

    let run = |seed: u64| -> Vec<Vec<ItemId>> {
        let engine = RecommendationEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..6)
            .map(|_| ids(&engine.recommend(&wardrobe, &weather, &mut rng)))
            .collect()
    };

    assert_eq!(run(99), run(99));

    let multi = |seed: u64| -> Vec<Vec<ItemId>> {
        let engine = RecommendationEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        engine
            .recommend_multiple(&wardrobe, &weather, &mut rng)
            .iter()
            .map(|r| ids(&r.items))
            .collect()
    };
    assert_eq!(multi(5), multi(5));
}

#[test]
fn test_filter_never_empties_a_wardrobe() {
    let wardrobe = vec![item(ClothingType::Shorts, &["olive"], &[Season::Summer])];
    for temperature in [-20.0, 0.0, 9.9, 10.0, 15.0, 19.99, 20.0, 35.0] {
        let weather = WeatherContext::new(temperature, "");
        assert_eq!(weather::filter(&wardrobe, &weather).len(), 1);
    }
}
