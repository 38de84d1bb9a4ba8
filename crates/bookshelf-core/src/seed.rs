//! The shelf a session starts with.

use crate::model::{Book, ReadingStatus};
use crate::notes::NoteLookup;

const BOOKS: [(&str, &str, &str, &str, ReadingStatus); 10] = [
    ("1", "The Midnight Library", "Matt Haig", "/Book_Cover_1.jpg", ReadingStatus::Completed),
    ("2", "Homegoing", "Yaa Gyasi", "/Book_Cover_2.jpg", ReadingStatus::Reading),
    ("3", "Slouching Towards Bethlehem", "Joan Didion", "/Book_Cover_3.jpg", ReadingStatus::Reading),
    ("4", "Whole Numbers and Half Truths", "Rukmini S.", "/Book_Cover_4.jpg", ReadingStatus::Completed),
    ("5", "Betting on the Muse", "Charles Bukowski", "/Book_Cover_5.jpg", ReadingStatus::Reading),
    ("6", "Memories on a Plate", "Brinda Narayan", "/Book_Cover_6.jpg", ReadingStatus::NotStarted),
    ("7", "Lekin", "Jaun Elia", "/Book_Cover_7.webp", ReadingStatus::Completed),
    ("8", "Munnu", "Malik Sajad", "/Book_Cover_8.jpg", ReadingStatus::Reading),
    ("9", "Before the Coffee Gets Cold", "Toshikazu Kawaguchi", "/Book_Cover_9.jpg", ReadingStatus::NotStarted),
    ("10", "Salt, Fat, Acid, Heat", "Samin Nosrat", "/Book_Cover_10.jpg", ReadingStatus::Reading),
];

const NOTES: [(&str, &str); 10] = [
    (
        "The Midnight Library",
        "This book reminded me that we all have infinite possibilities in life. Every choice we make creates a new path, but that doesn't mean the path not taken was better.\n\nThe way Matt Haig writes about depression and hope really touched me. Mrs. Elm's character felt like a warm hug in book form.\n\nStill thinking about those parallel lives...\n\n- Your fellow reader",
    ),
    (
        "Homegoing",
        "The way this story spans generations is breathtaking. Each chapter feels like discovering a new photograph in an old family album.\n\nFavorite chapters: Effia & Esi's stories\nThemes to remember: Legacy, Identity, Freedom\n\nThis book changed how I think about family stories.",
    ),
    (
        "Slouching Towards Bethlehem",
        "Didion's sharp observations cut right through the chaos of the 60s. Her writing style is like a camera capturing exact moments in time.\n\nThe title essay is particularly haunting. The way she describes the San Francisco scene feels eerily current.\n\nMust revisit the essay on self-respect.",
    ),
    (
        "Whole Numbers and Half Truths",
        "Key statistics to remember:\n- Demographics insights\n- Economic patterns\n- Social indicators\n\nLoved how data tells stories about modern India. Numbers don't lie, but context matters.\n\nNeed to fact-check these with recent data.",
    ),
    (
        "Betting on the Muse",
        "Bukowski's raw honesty hits different at 2 AM. His poems about ordinary life make the mundane feel extraordinary.\n\nFavorite poem: 'The Post Office'\nMood: Gritty realism\n\nReminder: Sometimes beauty hides in life's ugliest corners.",
    ),
    (
        "Memories on a Plate",
        "Loved the blend of storytelling and cooking. Each recipe feels like a memory being shared over a warm cup of tea.\n\nMust try:\n- The mango pickle recipe\n- Sunday morning dosa ritual\n\nReminder: Food is never just about eating.",
    ),
    (
        "Lekin",
        "Jaun Elia's words feel like midnight conversations with yourself. The Urdu flows like water, even in translation.\n\nFavorite lines marked on pg. 42\nMood: Melancholic beauty\n\nNeed to memorize more verses.",
    ),
    (
        "Munnu",
        "The black and white artwork perfectly captures Kashmir's complexity. Every panel feels heavy with meaning.\n\nPowerful moments:\n- The school scene\n- Family dinner\n\nArt and storytelling at their best.",
    ),
    (
        "Before the Coffee Gets Cold",
        "Read this in one sitting at my local coffee shop. The rules of time travel are so beautifully specific.\n\nQuestion: Which person from my past would I want to meet?\n\nMaybe some regrets are better left unexplored...",
    ),
    (
        "Salt, Fat, Acid, Heat",
        "More than a cookbook - it's like having a cooking teacher right beside you. The illustrations make complex concepts so clear.\n\nKey lessons:\n- Trust your senses\n- Understand the why\n- Practice, practice\n\nTime to experiment!",
    ),
];

/// The ten seed books, in shelf order.
#[must_use]
pub fn books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(|&(id, title, author, cover_url, status)| {
            Book::new(id, title, author, cover_url, status)
        })
        .collect()
}

/// Notes for the seed books.
#[must_use]
pub fn notes() -> NoteLookup {
    NOTES.into_iter().collect()
}
