//! Static catalog tables.
//!
//! Every table here is immutable demo data compiled into the binary. Nothing
//! mutates it at runtime; views borrow `&'static` references into it.

use std::num::NonZeroUsize;

/// A card shown in the search results for a genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Poster file name, shown as a caption in place of the image
    pub image: &'static str,
    /// External "More Info" page
    pub link: &'static str,
}

/// One hero image in the home carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
}

/// Entry in the watch-list grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchItem {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    /// Trailer opened by "Play Movie"
    pub trailer: &'static str,
}

/// Navigation payload handed to the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieRecord {
    pub id: u32,
    pub name: &'static str,
    pub video: &'static str,
}

/// A genre and its ordered card set.
#[derive(Debug, Clone, Copy)]
pub struct GenreEntry {
    pub name: &'static str,
    pub cards: &'static [MovieCard],
}

/// Studio tile in the production-house strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionHouse {
    pub name: &'static str,
    pub image: &'static str,
}

/// A titled column of external links in the footer.
#[derive(Debug, Clone, Copy)]
pub struct FooterSection {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide { image: "/images/img7.jpg" },
    Slide { image: "/images/img6.jpg" },
    Slide { image: "/images/img5.jpg" },
    Slide { image: "/images/img8.jpg" },
    Slide { image: "/images/img1.jpg" },
    Slide { image: "/images/img2.jpg" },
    Slide { image: "/images/img3.jpg" },
    Slide { image: "/images/img4.jpg" },
];

/// Number of hero slides. The carousel requires at least one.
pub const SLIDE_COUNT: NonZeroUsize = match NonZeroUsize::new(SLIDES.len()) {
    Some(count) => count,
    None => panic!("slide table must not be empty"),
};

pub const PRODUCTION_HOUSES: &[ProductionHouse] = &[
    ProductionHouse { name: "Disney", image: "/images/disney.png" },
    ProductionHouse { name: "Pixar", image: "/images/pixar.png" },
    ProductionHouse { name: "Marvel", image: "/images/marvel.png" },
    ProductionHouse { name: "Star Wars", image: "/images/starwar.png" },
    ProductionHouse { name: "National Geographic", image: "/images/nationalG.png" },
];

const ACTION: &[MovieCard] = &[
    MovieCard {
        id: 1,
        title: "Die Hard",
        description: "Action-packed classic!",
        image: "diehard.jpg",
        link: "https://www.imdb.com/title/tt0095016/",
    },
    MovieCard {
        id: 2,
        title: "Mad Max: Fury Road",
        description: "Post-apocalyptic thriller!",
        image: "madmax.jpeg",
        link: "https://www.imdb.com/title/tt1392190/",
    },
];

const COMEDY: &[MovieCard] = &[
    MovieCard {
        id: 1,
        title: "The Mask",
        description: "Jim Carrey's hilarious classic!",
        image: "mask.jpeg",
        link: "https://www.imdb.com/title/tt0110475/",
    },
    MovieCard {
        id: 2,
        title: "Superbad",
        description: "Teenage comedy sensation!",
        image: "superbad.jpeg",
        link: "https://www.imdb.com/title/tt0829482/",
    },
];

const THRILLER: &[MovieCard] = &[
    MovieCard {
        id: 1,
        title: "Se7en",
        description: "Dark thriller!",
        image: "se7en.png",
        link: "https://www.imdb.com/title/tt0114369/",
    },
    MovieCard {
        id: 2,
        title: "Gone Girl",
        description: "Psychological mystery!",
        image: "goneGirl.png",
        link: "https://www.imdb.com/title/tt2267998/",
    },
];

/// Genre index in suggestion order.
pub const GENRES: &[GenreEntry] = &[
    GenreEntry { name: "Action", cards: ACTION },
    GenreEntry { name: "Comedy", cards: COMEDY },
    GenreEntry { name: "Thriller", cards: THRILLER },
];

pub const WATCH_LIST: &[WatchItem] = &[
    WatchItem {
        id: 1,
        title: "Die Hard",
        image: "diehard.jpg",
        trailer: "https://www.youtube.com/watch?v=QIOX44m8ktc",
    },
    WatchItem {
        id: 2,
        title: "Mad Max: Fury Road",
        image: "madmax.jpeg",
        trailer: "https://www.youtube.com/watch?v=hEJnMQG9ev8",
    },
    WatchItem {
        id: 3,
        title: "The Mask",
        image: "mask.jpeg",
        trailer: "https://www.youtube.com/watch?v=hOqVRwGVUkA",
    },
    WatchItem {
        id: 4,
        title: "Superbad",
        image: "superbad.jpeg",
        trailer: "https://www.youtube.com/watch?v=4eaZ_48ZYog",
    },
    WatchItem {
        id: 5,
        title: "Se7en",
        image: "se7en.png",
        trailer: "https://www.youtube.com/watch?v=znmZoVkCjpI",
    },
    WatchItem {
        id: 6,
        title: "Gone Girl",
        image: "goneGirl.png",
        trailer: "https://www.youtube.com/watch?v=Ym3LB0lOJ0o",
    },
];

/// Titles listed in the home page table. Selecting one opens the detail view.
pub const FEATURED: &[MovieRecord] = &[
    MovieRecord { id: 1, name: "Die Hard", video: "https://www.youtube.com/watch?v=QIOX44m8ktc" },
    MovieRecord { id: 2, name: "Mad Max: Fury Road", video: "https://www.youtube.com/watch?v=hEJnMQG9ev8" },
    MovieRecord { id: 3, name: "The Mask", video: "https://www.youtube.com/watch?v=hOqVRwGVUkA" },
    MovieRecord { id: 4, name: "Superbad", video: "https://www.youtube.com/watch?v=4eaZ_48ZYog" },
    MovieRecord { id: 5, name: "Se7en", video: "https://www.youtube.com/watch?v=znmZoVkCjpI" },
    MovieRecord { id: 6, name: "Gone Girl", video: "https://www.youtube.com/watch?v=Ym3LB0lOJ0o" },
];

/// (movie id, description) pairs backing the "Movie Info" panel.
const DESCRIPTIONS: &[(u32, &str)] = &[
    (1, "An NYPD officer fights a band of thieves who take over a Los Angeles skyscraper on Christmas Eve."),
    (2, "In a post-apocalyptic wasteland, Max teams up with Furiosa to flee a tyrant and his war party."),
    (3, "A mild-mannered bank clerk finds an ancient mask that turns him into a manic, cartoonish trickster."),
    (4, "Two inseparable high-school seniors try to make the most of their last party before graduation."),
    (5, "Two detectives hunt a serial killer who stages his murders around the seven deadly sins."),
    (6, "A man becomes the prime suspect when his wife disappears on their fifth wedding anniversary."),
];

pub const FOOTER: &[FooterSection] = &[
    FooterSection {
        heading: "Company",
        links: &[
            FooterLink { label: "About Us", url: "https://www.hotstar.com/about-us/in" },
            FooterLink { label: "Careers", url: "https://careers.hotstar.com/" },
        ],
    },
    FooterSection {
        heading: "Need Help?",
        links: &[
            FooterLink { label: "Visit Help Center", url: "https://help.hotstar.com/in/en/support/home" },
            FooterLink {
                label: "Share Feedback",
                url: "https://help.hotstar.com/in/en/support/tickets/feedback",
            },
        ],
    },
    FooterSection {
        heading: "Connect with Us",
        links: &[
            FooterLink { label: "Facebook", url: "https://www.facebook.com/DisneyPlusHotstar" },
            FooterLink { label: "Twitter", url: "https://twitter.com/DisneyPlusHS" },
        ],
    },
    FooterSection {
        heading: "Get the App",
        links: &[
            FooterLink {
                label: "Google Play",
                url: "https://play.google.com/store/apps/details?id=in.startv.hotstar",
            },
            FooterLink {
                label: "App Store",
                url: "https://itunes.apple.com/in/app/hotstar/id934459219?mt=8",
            },
        ],
    },
];

/// Genre names in table order.
pub fn genre_names() -> impl Iterator<Item = &'static str> {
    GENRES.iter().map(|g| g.name)
}

/// Cards for an exact genre name.
pub fn cards_for(genre: &str) -> Option<&'static [MovieCard]> {
    GENRES.iter().find(|g| g.name == genre).map(|g| g.cards)
}

/// Look up the description for a movie.
pub fn description_for(movie_id: u32) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(id, _)| *id == movie_id)
        .map(|(_, text)| *text)
}

/// Footer links flattened in reading order (section by section).
pub fn footer_links() -> impl Iterator<Item = &'static FooterLink> {
    FOOTER.iter().flat_map(|section| section.links.iter())
}

/// Build the detail-view payload for a watch-list entry.
pub fn record_for_watch_item(item: &WatchItem) -> MovieRecord {
    MovieRecord {
        id: item.id,
        name: item.title,
        video: item.trailer,
    }
}
