use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::{category, project, project_image, subcategory};

struct SeedProject {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    slug: &'static str,
    category_id: &'static str,
    subcategory_id: &'static str,
    image: &'static str,
    featured: bool,
    location: &'static str,
    year: i32,
    materials: &'static [&'static str],
    dimensions: &'static str,
    /// (год, месяц, день)
    created: (i32, u32, u32),
    gallery: &'static [&'static str],
}

const CATEGORIES: &[(&str, &str)] = &[("cat-outdoor", "Outdoor"), ("cat-indoor", "Indoor")];

const SUBCATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("sub-pergolas", "Pergolas", "pergolas", "cat-outdoor"),
    ("sub-pool-areas", "Pool Areas", "pool-areas", "cat-outdoor"),
    ("sub-complete-spaces", "Complete Spaces", "complete-spaces", "cat-outdoor"),
    ("sub-living-rooms", "Living Rooms", "living-rooms", "cat-indoor"),
    ("sub-kitchens", "Kitchens", "kitchens", "cat-indoor"),
];

const PROJECTS: &[SeedProject] = &[
    SeedProject {
        id: "proj-modern-pergola-paradise",
        title: "Modern Pergola Paradise",
        description: "Contemporary design with clean lines and premium materials",
        slug: "modern-pergola-paradise",
        category_id: "cat-outdoor",
        subcategory_id: "sub-pergolas",
        image: "image-per1-1600x1067-jpg",
        featured: true,
        location: "Scottsdale, AZ",
        year: 2024,
        materials: &["Aluminum", "Teak"],
        dimensions: "16 ft x 20 ft",
        created: (2024, 5, 12),
        gallery: &["image-per2-1600x1067-jpg", "image-per3-1600x1067-jpg"],
    },
    SeedProject {
        id: "proj-garden-retreat",
        title: "Garden Pergola Retreat",
        description: "Natural wood finish with climbing plant integration",
        slug: "garden-retreat",
        category_id: "cat-outdoor",
        subcategory_id: "sub-pergolas",
        image: "image-per3-1600x1067-jpg",
        featured: false,
        location: "Portland, OR",
        year: 2023,
        materials: &["Western Red Cedar", "Copper fittings"],
        dimensions: "12 ft x 14 ft",
        created: (2023, 9, 2),
        gallery: &["image-per1-1600x1067-jpg"],
    },
    SeedProject {
        id: "proj-luxury-outdoor-living",
        title: "Luxury Outdoor Living",
        description: "Complete outdoor transformation with integrated lighting",
        slug: "luxury-outdoor-living",
        category_id: "cat-outdoor",
        subcategory_id: "sub-complete-spaces",
        image: "image-per2-1600x1067-jpg",
        featured: true,
        location: "Austin, TX",
        year: 2024,
        materials: &["Steel", "Ipe decking", "LED lighting"],
        dimensions: "30 ft x 24 ft",
        created: (2024, 3, 20),
        gallery: &["image-per1-1600x1067-jpg", "image-per3-1600x1067-jpg"],
    },
    SeedProject {
        id: "proj-poolside-elegance",
        title: "Poolside Elegance",
        description: "Water-resistant design with premium shade solutions",
        slug: "poolside-elegance",
        category_id: "cat-outdoor",
        subcategory_id: "sub-pool-areas",
        image: "image-per2-1600x1067-jpg",
        featured: false,
        location: "Miami, FL",
        year: 2022,
        materials: &["Powder-coated aluminum"],
        dimensions: "18 ft x 12 ft",
        created: (2022, 7, 8),
        gallery: &[],
    },
    SeedProject {
        id: "proj-warm-living-room",
        title: "Warm Minimal Living Room",
        description: "Timber slat ceiling and built-in shelving",
        slug: "warm-minimal-living-room",
        category_id: "cat-indoor",
        subcategory_id: "sub-living-rooms",
        image: "image-in1-1600x1067-jpg",
        featured: true,
        location: "Denver, CO",
        year: 2023,
        materials: &["White oak", "Linen"],
        dimensions: "22 ft x 18 ft",
        created: (2023, 11, 15),
        gallery: &["image-in2-1600x1067-jpg"],
    },
    SeedProject {
        id: "proj-chef-kitchen",
        title: "Chef's Kitchen",
        description: "Open kitchen with a walnut island and brass accents",
        slug: "chefs-kitchen",
        category_id: "cat-indoor",
        subcategory_id: "sub-kitchens",
        image: "image-in2-1600x1067-jpg",
        featured: false,
        location: "Seattle, WA",
        year: 2024,
        materials: &["Walnut", "Quartz", "Brass"],
        dimensions: "14 ft x 16 ft",
        created: (2024, 1, 30),
        gallery: &[],
    },
];

/// Заполнить пустую базу демонстрационным контентом.
/// Если категории уже есть, ничего не делает.
pub async fn seed_demo_content(conn: &DatabaseConnection) -> anyhow::Result<()> {
    if category::Entity::find().one(conn).await?.is_some() {
        tracing::info!("Content store already has data, skipping demo seed");
        return Ok(());
    }

    for (id, title) in CATEGORIES {
        category::ActiveModel {
            id: Set(id.to_string()),
            title: Set(title.to_string()),
        }
        .insert(conn)
        .await?;
    }

    for (id, title, slug, category_id) in SUBCATEGORIES {
        subcategory::ActiveModel {
            id: Set(id.to_string()),
            title: Set(title.to_string()),
            slug: Set(slug.to_string()),
            category_id: Set(Some(category_id.to_string())),
        }
        .insert(conn)
        .await?;
    }

    for seed in PROJECTS {
        let (y, m, d) = seed.created;
        let created_at = Utc
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("Invalid seed date for {}", seed.id))?;

        project::ActiveModel {
            id: Set(seed.id.to_string()),
            title: Set(seed.title.to_string()),
            description: Set(seed.description.to_string()),
            slug: Set(seed.slug.to_string()),
            category_id: Set(Some(seed.category_id.to_string())),
            subcategory_id: Set(Some(seed.subcategory_id.to_string())),
            main_image_ref: Set(Some(seed.image.to_string())),
            main_image_alt: Set(Some(seed.title.to_string())),
            featured: Set(seed.featured),
            location: Set(Some(seed.location.to_string())),
            year: Set(Some(seed.year)),
            materials: Set(Some(serde_json::to_string(seed.materials)?)),
            dimensions: Set(Some(seed.dimensions.to_string())),
            created_at: Set(created_at),
        }
        .insert(conn)
        .await?;

        for (position, asset_ref) in seed.gallery.iter().enumerate() {
            project_image::ActiveModel {
                id: Set(format!("{}-img-{}", seed.id, position + 1)),
                project_id: Set(seed.id.to_string()),
                position: Set(position as i32),
                asset_ref: Set(asset_ref.to_string()),
                alt: Set(None),
            }
            .insert(conn)
            .await?;
        }
    }

    tracing::info!(
        "Seeded demo content: {} categories, {} subcategories, {} projects",
        CATEGORIES.len(),
        SUBCATEGORIES.len(),
        PROJECTS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let conn = connect_in_memory().await.unwrap();
        seed_demo_content(&conn).await.unwrap();
        seed_demo_content(&conn).await.unwrap();

        let projects = project::Entity::find().count(&conn).await.unwrap();
        assert_eq!(projects as usize, PROJECTS.len());
    }

    #[test]
    fn test_seed_slugs_are_valid() {
        for (_, _, slug, _) in SUBCATEGORIES {
            assert!(contracts::domain::common::is_canonical_slug(slug), "{}", slug);
        }
        for seed in PROJECTS {
            assert!(contracts::domain::common::is_canonical_slug(seed.slug), "{}", seed.slug);
            assert!(contracts::domain::common::ImageAsset::parse(seed.image).is_some());
        }
    }
}
