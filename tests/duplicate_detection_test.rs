use anyhow::Result;
use recipe_dedup::{
    check_for_duplicates, check_global_duplicate, DuplicateDetector, DuplicateType,
    DuplicateVerdict, ExistingRecipe, InMemoryRecipeStorage, JsonCatalogStorage, RecipeOrigin,
    RecipeStorage,
};
use std::io::Write;
use tempfile::NamedTempFile;

const USER: &str = "user-42";

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn storage_with_user_recipes(recipes: Vec<ExistingRecipe>) -> InMemoryRecipeStorage {
    let storage = InMemoryRecipeStorage::new();
    for recipe in recipes {
        storage.add_user_recipe(USER, recipe).await;
    }
    storage
}

#[tokio::test]
async fn test_exact_name_wins_over_ingredients() -> Result<()> {
    let daiquiri = ["2 oz White Rum", "1 oz Lime Juice", "0.75 oz Simple Syrup"];
    let storage =
        storage_with_user_recipes(vec![ExistingRecipe::new(Some(1), "Daiquiri", &daiquiri)]).await;

    let verdict = check_for_duplicates("daiquiri", &lines(&daiquiri), USER, &storage).await?;

    assert!(verdict.is_duplicate);
    assert_eq!(verdict.duplicate_type, Some(DuplicateType::ExactName));
    assert!(verdict.message.unwrap().contains("daiquiri"));
    Ok(())
}

#[tokio::test]
async fn test_article_difference_is_similar_name() -> Result<()> {
    let storage = storage_with_user_recipes(vec![ExistingRecipe::new(
        Some(5),
        "The Last Word",
        &["0.75 oz Gin", "0.75 oz Green Chartreuse"],
    )])
    .await;

    let verdict = check_for_duplicates("Last Word", &[], USER, &storage).await?;

    assert_eq!(verdict.duplicate_type, Some(DuplicateType::SimilarName));
    let existing = verdict.existing_recipe.unwrap();
    assert_eq!(existing.id, Some(5));
    assert_eq!(existing.name, "The Last Word");
    assert_eq!(existing.origin, RecipeOrigin::User);
    Ok(())
}

#[tokio::test]
async fn test_first_similar_recipe_in_storage_order_wins() -> Result<()> {
    let storage = storage_with_user_recipes(vec![
        ExistingRecipe::new(Some(1), "Margaritas", &[]),
        ExistingRecipe::new(Some(2), "The Margarita", &[]),
    ])
    .await;

    let verdict = check_for_duplicates("Margarita", &[], USER, &storage).await?;

    assert_eq!(verdict.duplicate_type, Some(DuplicateType::SimilarName));
    assert_eq!(verdict.existing_recipe.unwrap().id, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_same_ingredients_under_a_different_name() -> Result<()> {
    let storage = storage_with_user_recipes(vec![ExistingRecipe::new(
        Some(9),
        "Classic Negroni",
        &["1 oz Gin", "1 oz Campari", "1 oz Sweet Vermouth"],
    )])
    .await;

    let verdict = check_for_duplicates(
        "Negroni Twist",
        &lines(&["1 oz gin", "1 oz campari", "1 oz sweet vermouth"]),
        USER,
        &storage,
    )
    .await?;

    assert_eq!(verdict.duplicate_type, Some(DuplicateType::SameIngredients));
    let existing = verdict.existing_recipe.unwrap();
    assert_eq!(existing.id, Some(9));
    assert_eq!(existing.name, "Classic Negroni");
    Ok(())
}

#[tokio::test]
async fn test_global_catalog_fallback() -> Result<()> {
    let storage = storage_with_user_recipes(vec![ExistingRecipe::new(
        Some(1),
        "Old Fashioned",
        &["2 oz Bourbon", "2 dashes Angostura"],
    )])
    .await;
    storage
        .add_global_recipe(ExistingRecipe::new(
            None,
            "Paloma",
            &["2 oz Tequila", "Grapefruit Soda"],
        ))
        .await;

    let verdict = check_for_duplicates(" the paloma ", &[], USER, &storage).await?;

    assert_eq!(verdict.duplicate_type, Some(DuplicateType::GlobalRecipe));
    let existing = verdict.existing_recipe.unwrap();
    assert_eq!(existing.name, "Paloma");
    assert_eq!(existing.origin, RecipeOrigin::Global);
    assert_eq!(existing.id, None);
    Ok(())
}

#[tokio::test]
async fn test_global_fallback_requires_equal_normalized_names() -> Result<()> {
    let storage = InMemoryRecipeStorage::new();
    storage
        .add_global_recipe(ExistingRecipe::new(None, "Palomas", &[]))
        .await;

    // user-facing path only checks normalized equality against the catalog
    let verdict = check_for_duplicates("Paloma", &[], USER, &storage).await?;

    assert!(!verdict.is_duplicate);
    Ok(())
}

#[tokio::test]
async fn test_unrelated_recipe_is_not_a_duplicate() -> Result<()> {
    let storage = storage_with_user_recipes(vec![ExistingRecipe::new(
        Some(1),
        "Daiquiri",
        &["2 oz White Rum", "1 oz Lime Juice", "0.75 oz Simple Syrup"],
    )])
    .await;
    storage
        .add_global_recipe(ExistingRecipe::new(None, "Paloma", &["2 oz Tequila"]))
        .await;

    let verdict = check_for_duplicates(
        "Penicillin",
        &lines(&["2 oz Blended Scotch", "0.75 oz Honey Ginger Syrup", "0.25 oz Islay Scotch"]),
        USER,
        &storage,
    )
    .await?;

    assert_eq!(verdict, DuplicateVerdict::not_duplicate());
    assert_eq!(serde_json::to_string(&verdict)?, r#"{"isDuplicate":false}"#);
    Ok(())
}

#[tokio::test]
async fn test_other_users_recipes_are_ignored() -> Result<()> {
    let storage = InMemoryRecipeStorage::new();
    storage
        .add_user_recipe("someone-else", ExistingRecipe::new(Some(1), "Negroni", &["1 oz Gin"]))
        .await;

    let verdict = check_for_duplicates("Negroni", &lines(&["1 oz Gin"]), USER, &storage).await?;

    assert!(!verdict.is_duplicate);
    Ok(())
}

#[tokio::test]
async fn test_global_check_precedence() -> Result<()> {
    let storage = InMemoryRecipeStorage::new();
    storage
        .add_global_recipe(ExistingRecipe::new(Some(1), "Negroni", &["1 oz Gin", "1 oz Campari", "1 oz Sweet Vermouth"]))
        .await;
    storage
        .add_global_recipe(ExistingRecipe::new(Some(2), "Margaritas", &["2 oz Tequila", "1 oz Cointreau"]))
        .await;

    let exact = check_global_duplicate("The Negroni", &[], &storage).await?;
    assert_eq!(exact.duplicate_type, Some(DuplicateType::ExactName));
    assert_eq!(exact.existing_recipe.unwrap().origin, RecipeOrigin::Global);

    // one insertion over ten chars scores exactly 0.9
    let similar = check_global_duplicate("Margarita", &[], &storage).await?;
    assert_eq!(similar.duplicate_type, Some(DuplicateType::SimilarName));
    assert_eq!(similar.existing_recipe.unwrap().id, Some(2));

    let same = check_global_duplicate(
        "Equal Parts",
        &lines(&["1 oz sweet vermouth", "1 oz campari", "1 oz gin"]),
        &storage,
    )
    .await?;
    assert_eq!(same.duplicate_type, Some(DuplicateType::SameIngredients));
    assert_eq!(same.existing_recipe.unwrap().name, "Negroni");

    let none = check_global_duplicate("Penicillin", &lines(&["2 oz Scotch"]), &storage).await?;
    assert!(!none.is_duplicate);
    Ok(())
}

#[tokio::test]
async fn test_global_check_uses_stricter_threshold() -> Result<()> {
    let storage = InMemoryRecipeStorage::new();
    storage
        .add_global_recipe(ExistingRecipe::new(None, "Daiquiri", &[]))
        .await;
    storage
        .add_user_recipe(USER, ExistingRecipe::new(Some(3), "Daiquiri", &[]))
        .await;

    // "daquiri" scores 0.875: similar for a user, not for the catalog
    let user_verdict = check_for_duplicates("Daquiri", &[], USER, &storage).await?;
    let global_verdict = check_global_duplicate("Daquiri", &[], &storage).await?;

    assert_eq!(user_verdict.duplicate_type, Some(DuplicateType::SimilarName));
    assert!(!global_verdict.is_duplicate);
    Ok(())
}

#[tokio::test]
async fn test_empty_ingredient_lists_are_not_duplicates_of_each_other() -> Result<()> {
    let storage = InMemoryRecipeStorage::new();
    storage
        .add_global_recipe(ExistingRecipe::new(None, "Mystery Shot", &["1 oz"]))
        .await;

    let verdict = check_global_duplicate("Surprise", &lines(&["2 oz", "3 dashes"]), &storage).await?;

    assert!(!verdict.is_duplicate);
    Ok(())
}

#[tokio::test]
async fn test_detector_over_json_catalog() -> Result<()> {
    let mut catalog = NamedTempFile::new()?;
    catalog.write_all(
        br#"{
            "users": {
                "user-42": [
                    {"id": 11, "name": "Classic Negroni", "ingredients": ["1 oz Gin", "1 oz Campari", "1 oz Sweet Vermouth"]}
                ]
            },
            "global": [{"name": "Paloma"}]
        }"#,
    )?;

    let storage = JsonCatalogStorage::new(catalog.path());
    let detector = DuplicateDetector::new(storage);

    let same = detector
        .check_for_duplicates(
            "Negroni Twist",
            &lines(&["1 oz gin", "1 oz campari", "1 oz sweet vermouth"]),
            USER,
        )
        .await?;
    assert_eq!(same.duplicate_type, Some(DuplicateType::SameIngredients));

    let global = detector.check_for_duplicates("The Paloma", &[], USER).await?;
    assert_eq!(global.duplicate_type, Some(DuplicateType::GlobalRecipe));
    Ok(())
}

#[tokio::test]
async fn test_works_through_trait_object() -> Result<()> {
    let storage = storage_with_user_recipes(vec![ExistingRecipe::new(Some(1), "Sazerac", &[])]).await;
    let dyn_storage: &dyn RecipeStorage = &storage;

    let verdict = check_for_duplicates("Sazerac", &[], USER, dyn_storage).await?;

    assert_eq!(verdict.duplicate_type, Some(DuplicateType::ExactName));
    Ok(())
}
