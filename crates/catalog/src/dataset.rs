//! The built-in movie table and trivia facts.
//!
//! Rows are kept as `&'static str` tuples so the table lives in read-only
//! memory; `builtin_movies` turns them into owned `Movie` records.

use crate::types::Movie;

/// (id, title, poster, genres, imdb, year, trailer, plot)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    f32,
    u16,
    &'static str,
    &'static str,
);

const POSTER_DESERT: &str =
    "https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=300&h=450&fit=crop";
const POSTER_THEATER: &str =
    "https://images.unsplash.com/photo-1489599328181-9b7dfafbcbce?w=300&h=450&fit=crop";
const POSTER_CITY: &str =
    "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?w=300&h=450&fit=crop";
const POSTER_NEON: &str =
    "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?w=300&h=450&fit=crop";
const POSTER_STREET: &str =
    "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=300&h=450&fit=crop";
const POSTER_COLOR: &str =
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=450&fit=crop";

const ROWS: [Row; 10] = [
    (
        "1",
        "Mad Max: Fury Road",
        POSTER_DESERT,
        &["Action", "Adventure", "Sci-Fi"],
        8.1,
        2015,
        "https://www.youtube.com/watch?v=hEJnMQG9ev8",
        "In a post-apocalyptic wasteland, Max joins Furiosa to flee from a tyrant who controls the land's water supply.",
    ),
    (
        "2",
        "John Wick",
        POSTER_THEATER,
        &["Action", "Crime", "Thriller"],
        7.4,
        2014,
        "https://www.youtube.com/watch?v=C0BMx-qxsP4",
        "An ex-hitman comes out of retirement to track down the gangsters that took everything from him.",
    ),
    (
        "3",
        "Lost in Translation",
        POSTER_CITY,
        &["Drama", "Romance"],
        7.7,
        2003,
        "https://www.youtube.com/watch?v=W4jViHpZdHQ",
        "A faded movie star and a neglected young woman form an unlikely bond in Tokyo.",
    ),
    (
        "4",
        "Her",
        POSTER_NEON,
        &["Drama", "Romance", "Sci-Fi"],
        8.0,
        2013,
        "https://www.youtube.com/watch?v=WzV6mXIOVl4",
        "A sensitive writer develops an unlikely relationship with an operating system designed to meet his needs.",
    ),
    (
        "5",
        "The Pursuit of Happyness",
        POSTER_STREET,
        &["Biography", "Drama"],
        8.0,
        2006,
        "https://www.youtube.com/watch?v=89Kq8SDyvfg",
        "A struggling salesman takes custody of his son as he's poised to begin a life-changing professional career.",
    ),
    (
        "6",
        "Inside Out",
        POSTER_COLOR,
        &["Animation", "Adventure", "Comedy"],
        8.1,
        2015,
        "https://www.youtube.com/watch?v=yRUAzGQ3nSY",
        "After young Riley is uprooted from her Midwest life, her emotions conflict on how best to navigate a new city.",
    ),
    (
        "7",
        "The Grand Budapest Hotel",
        POSTER_THEATER,
        &["Adventure", "Comedy", "Crime"],
        8.1,
        2014,
        "https://www.youtube.com/watch?v=1Fg5iWmQjwk",
        "A legendary concierge and his protégé become involved in a murder mystery at a famous European hotel.",
    ),
    (
        "8",
        "Paddington",
        POSTER_THEATER,
        &["Adventure", "Comedy", "Family"],
        7.3,
        2014,
        "https://www.youtube.com/watch?v=EKhUxGTUoVg",
        "A young Peruvian bear travels to London in search of a home and finds himself lost at Paddington Station.",
    ),
    (
        "9",
        "The Secret Life of Walter Mitty",
        POSTER_CITY,
        &["Adventure", "Comedy", "Drama"],
        7.3,
        2013,
        "https://www.youtube.com/watch?v=QD6cy4PBQPI",
        "A daydreamer escapes his anonymous life by disappearing into a world of fantasies filled with heroism and romance.",
    ),
    (
        "10",
        "A Good Year",
        POSTER_NEON,
        &["Comedy", "Drama", "Romance"],
        6.9,
        2006,
        "https://www.youtube.com/watch?v=B3Z9GJ0fSvU",
        "A British investment broker inherits his uncle's chateau and vineyard in Provence, where he spent much of his childhood.",
    ),
];

/// Movie trivia shown on the landing screen
pub const TRIVIA: [&str; 8] = [
    "Did you know? The average movie trailer is 2 minutes and 30 seconds long.",
    "Fun fact: The first movie ever made was only 2.11 seconds long!",
    "Movie magic: Most films are shot at 24 frames per second.",
    "Behind the scenes: The term 'blockbuster' comes from long lines 'blocking' city streets.",
    "Cinema history: The first Oscar ceremony lasted only 15 minutes!",
    "Movie milestone: 'Avatar' was the first film to gross over $2 billion worldwide.",
    "Film fact: Alfred Hitchcock never won an Oscar for Best Director.",
    "Industry insight: Netflix produces over 700 original movies and shows annually.",
];

/// Build owned records for the built-in table, in dataset order
pub fn builtin_movies() -> Vec<Movie> {
    ROWS.iter()
        .map(|&(id, title, poster, genres, imdb, year, trailer, plot)| Movie {
            id: id.to_string(),
            title: title.to_string(),
            poster: poster.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            imdb,
            year,
            trailer_url: trailer.to_string(),
            plot: plot.to_string(),
        })
        .collect()
}
