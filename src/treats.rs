use serde_derive::Deserialize;
use std::cmp::Reverse;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Treat {
    pub category: String,
    pub description: String,
    pub contributor: String,
}

impl Treat {
    pub fn new(category: &str, description: &str, contributor: &str) -> Treat {
        Treat {
            category: category.to_owned(),
            description: description.to_owned(),
            contributor: contributor.to_owned(),
        }
    }
}

/// What people have said they'll bring, used when the settings don't list any treats.
pub fn default_treats() -> Vec<Treat> {
    vec![
        Treat::new("dessert", "Chocolate mousse", "Leslie"),
        Treat::new("dessert", "Cardamom-Pear pie", "Joel"),
        Treat::new("appetizer", "Humboldt Fog cheese", "Meggie"),
        Treat::new("dessert", "Lemon bars", "Bonnie"),
        Treat::new("appetizer", "Mini-enchiladas", "Katie"),
        Treat::new("drink", "Sangria", "Anges"),
        Treat::new("dessert", "Chocolate-raisin cookies", "Henry"),
        Treat::new("dessert", "Brownies", "Sarah"),
    ]
}

#[derive(Debug, Default, PartialEq)]
pub struct CategoryTally {
    pub most: Vec<String>,
    pub least: Vec<String>,
}

/// Finds the categories brought most and least often.
///
/// Every category tied at an extreme is included, so a list where all
/// categories are equally common yields the same set twice. Within each set
/// categories keep the order in which they first appear in `treats`.
pub fn most_and_least_common_categories(treats: &[Treat]) -> CategoryTally {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for treat in treats {
        match counts
            .iter_mut()
            .find(|(category, _)| *category == treat.category)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((treat.category.as_str(), 1)),
        }
    }

    // Stable, so equal counts stay in first-seen order.
    counts.sort_by_key(|&(_, count)| Reverse(count));

    let (highest, lowest) = match (counts.first(), counts.last()) {
        (Some(&(_, highest)), Some(&(_, lowest))) => (highest, lowest),
        _ => return CategoryTally::default(),
    };

    let most = counts
        .iter()
        .take_while(|&&(_, count)| count == highest)
        .map(|&(category, _)| category.to_owned())
        .collect();

    let mut least: Vec<String> = counts
        .iter()
        .rev()
        .take_while(|&&(_, count)| count == lowest)
        .map(|&(category, _)| category.to_owned())
        .collect();
    least.reverse();

    CategoryTally { most, least }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treats_of(categories: &[(&str, usize)]) -> Vec<Treat> {
        categories
            .iter()
            .flat_map(|&(category, n)| {
                (0..n).map(move |i| Treat::new(category, "food", &i.to_string()))
            })
            .collect()
    }

    fn sorted(mut categories: Vec<String>) -> Vec<String> {
        categories.sort();
        categories
    }

    #[test]
    fn single_winner_at_each_end() {
        let tally = most_and_least_common_categories(&treats_of(&[
            ("drink", 5),
            ("appetizer", 2),
            ("dessert", 1),
        ]));
        assert_eq!(tally.most, vec!["drink"]);
        assert_eq!(tally.least, vec!["dessert"]);
    }

    #[test]
    fn ties_for_least_are_all_returned() {
        let tally = most_and_least_common_categories(&treats_of(&[
            ("drink", 5),
            ("appetizer", 1),
            ("dessert", 1),
        ]));
        assert_eq!(tally.most, vec!["drink"]);
        assert_eq!(sorted(tally.least), vec!["appetizer", "dessert"]);
    }

    #[test]
    fn ties_for_most_are_all_returned() {
        let tally = most_and_least_common_categories(&treats_of(&[
            ("drink", 3),
            ("appetizer", 1),
            ("dessert", 3),
        ]));
        assert_eq!(sorted(tally.most), vec!["dessert", "drink"]);
        assert_eq!(tally.least, vec!["appetizer"]);
    }

    #[test]
    fn one_category_is_both_most_and_least() {
        let tally = most_and_least_common_categories(&treats_of(&[("drink", 7)]));
        assert_eq!(tally.most, vec!["drink"]);
        assert_eq!(tally.least, vec!["drink"]);
    }

    #[test]
    fn equal_counts_give_equal_sets() {
        let tally = most_and_least_common_categories(&treats_of(&[
            ("drink", 2),
            ("appetizer", 2),
            ("dessert", 2),
        ]));
        assert_eq!(tally.most, tally.least);
        assert_eq!(tally.most, vec!["drink", "appetizer", "dessert"]);
    }

    #[test]
    fn single_treat() {
        let tally =
            most_and_least_common_categories(&[Treat::new("dessert", "Brownies", "Sarah")]);
        assert_eq!(tally.most, vec!["dessert"]);
        assert_eq!(tally.least, vec!["dessert"]);
    }

    #[test]
    fn no_treats() {
        assert_eq!(
            most_and_least_common_categories(&[]),
            CategoryTally::default()
        );
    }

    #[test]
    fn interleaved_categories_are_counted_together() {
        let treats = vec![
            Treat::new("dessert", "a", "x"),
            Treat::new("drink", "b", "x"),
            Treat::new("dessert", "c", "x"),
            Treat::new("appetizer", "d", "x"),
            Treat::new("drink", "e", "x"),
            Treat::new("dessert", "f", "x"),
        ];
        let tally = most_and_least_common_categories(&treats);
        assert_eq!(tally.most, vec!["dessert"]);
        assert_eq!(tally.least, vec!["appetizer"]);
    }

    #[test]
    fn default_party_is_mostly_dessert() {
        let tally = most_and_least_common_categories(&default_treats());
        assert_eq!(tally.most, vec!["dessert"]);
        assert_eq!(tally.least, vec!["drink"]);
    }
}
