// src/stats.rs

//! Pure aggregation over an in-memory list of blogs.
//!
//! Nothing here touches the database or the HTTP layer; callers pass an
//! already-materialized slice. Empty input is a valid state and yields
//! `None` (or zero), never an error.

use serde::Serialize;

use crate::models::blog::Blog;

/// An author together with how many blogs they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// An author together with their accumulated likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Number of blogs in the list.
pub fn count_blogs(blogs: &[Blog]) -> usize {
    blogs.len()
}

/// Sum of likes across all blogs. 0 for an empty list.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|b| b.likes).sum()
}

/// The blog with the most likes.
///
/// Ties resolve to the earliest such blog: the scan only replaces the
/// current best on a strictly greater likes value.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    let mut best: Option<&Blog> = None;
    for blog in blogs {
        if best.is_none_or(|b| blog.likes > b.likes) {
            best = Some(blog);
        }
    }
    best
}

/// The author with the most blogs.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    top_author(blogs, |count: &mut usize, _| *count += 1)
        .map(|(author, blogs)| AuthorBlogs { author: author.to_owned(), blogs })
}

/// The author with the highest total likes.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    top_author(blogs, |likes: &mut i64, blog| *likes += blog.likes)
        .map(|(author, likes)| AuthorLikes { author: author.to_owned(), likes })
}

/// Groups blogs by author (exact string match), folds each group to a
/// scalar, and returns the author whose scalar is largest.
///
/// Grouping preserves first-seen author order and the extremum scan uses a
/// strictly-greater comparison, so ties resolve to the first group that
/// reached the maximum. Both "top author" queries share this shape.
fn top_author<'a, T, F>(blogs: &'a [Blog], fold: F) -> Option<(&'a str, T)>
where
    T: Default + Copy + PartialOrd,
    F: FnMut(&mut T, &'a Blog),
{
    let groups = group_by_author(blogs, fold);

    let mut best: Option<(&str, T)> = None;
    for (author, value) in groups {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((author, value)),
        }
    }
    best
}

/// Partitions blogs by author, folding each partition as it grows.
/// Groups come back in first-seen order.
fn group_by_author<'a, T, F>(blogs: &'a [Blog], mut fold: F) -> Vec<(&'a str, T)>
where
    T: Default,
    F: FnMut(&mut T, &'a Blog),
{
    let mut groups: Vec<(&str, T)> = Vec::new();

    for blog in blogs {
        let idx = match groups.iter().position(|(author, _)| *author == blog.author) {
            Some(idx) => idx,
            None => {
                groups.push((blog.author.as_str(), T::default()));
                groups.len() - 1
            }
        };
        fold(&mut groups[idx].1, blog);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(author: &str, likes: i64) -> Blog {
        Blog {
            id: 0,
            user_id: 0,
            title: format!("{author}'s blog"),
            author: author.to_string(),
            url: "https://example.com".to_string(),
            likes,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn count_of_empty_list_is_zero() {
        assert_eq!(count_blogs(&[]), 0);
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_of_one_blog_equals_its_likes() {
        let blogs = vec![blog("A", 7)];
        assert_eq!(total_likes(&blogs), 7);
    }

    #[test]
    fn total_likes_sums_the_whole_list() {
        let blogs = vec![blog("A", 5), blog("B", 10), blog("A", 3)];
        assert_eq!(total_likes(&blogs), 18);
        assert_eq!(count_blogs(&blogs), 3);
    }

    #[test]
    fn favorite_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn favorite_is_the_blog_with_most_likes() {
        let blogs = vec![blog("A", 5), blog("B", 10), blog("A", 3)];
        assert_eq!(favorite_blog(&blogs).map(|b| b.likes), Some(10));
    }

    #[test]
    fn favorite_with_unique_maximum_ignores_order() {
        let mut blogs = vec![blog("A", 5), blog("B", 10), blog("A", 3)];
        assert_eq!(
            favorite_blog(&blogs).map(|b| b.author.clone()),
            Some("B".to_string())
        );

        blogs.reverse();
        assert_eq!(
            favorite_blog(&blogs).map(|b| b.author.clone()),
            Some("B".to_string())
        );
    }

    #[test]
    fn favorite_tie_keeps_the_earliest_blog() {
        let blogs = vec![blog("first", 5), blog("second", 5)];
        assert_eq!(
            favorite_blog(&blogs).map(|b| b.author.clone()),
            Some("first".to_string())
        );
    }

    #[test]
    fn most_blogs_of_empty_list_is_none() {
        assert!(most_blogs(&[]).is_none());
    }

    #[test]
    fn most_blogs_picks_the_most_prolific_author() {
        let blogs = vec![blog("A", 5), blog("B", 10), blog("A", 3)];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: "A".to_string(),
                blogs: 2,
            })
        );
    }

    #[test]
    fn most_likes_of_empty_list_is_none() {
        assert!(most_likes(&[]).is_none());
    }

    #[test]
    fn most_likes_sums_per_author() {
        let blogs = vec![blog("A", 5), blog("B", 10), blog("A", 3)];
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "B".to_string(),
                likes: 10,
            })
        );
    }

    #[test]
    fn most_likes_tie_resolves_to_first_seen_author() {
        let blogs = vec![blog("A", 5), blog("B", 5)];
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "A".to_string(),
                likes: 5,
            })
        );
    }

    #[test]
    fn most_blogs_tie_resolves_to_first_seen_author() {
        let blogs = vec![blog("A", 1), blog("B", 2), blog("A", 3), blog("B", 4)];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: "A".to_string(),
                blogs: 2,
            })
        );
    }
}
