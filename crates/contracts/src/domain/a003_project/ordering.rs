//! Порядок списков проектов: сначала избранные, затем новые.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::{FeaturedProject, Project, ProjectCard};

/// Всё, что умеет встать в список проектов
pub trait Listed {
    fn featured(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Listed for ProjectCard {
    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listed for Project {
    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listed for FeaturedProject {
    fn featured(&self) -> bool {
        self.card.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.card.created_at
    }
}

/// `featured` по убыванию, затем `created_at` по убыванию
pub fn listing_order<T: Listed>(a: &T, b: &T) -> Ordering {
    b.featured()
        .cmp(&a.featured())
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

/// Стабильная сортировка списка в порядке отображения
pub fn sort_for_listing<T: Listed>(items: &mut [T]) {
    items.sort_by(listing_order);
}
