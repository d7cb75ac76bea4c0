// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Built-in 75-query evaluation dataset.
//!
//! Composition: 40 `match` (paraphrased lookups that should hit), 15 `neg`
//! (unrelated lookups that should miss), 10 `hard-neg` (semantically adjacent
//! lookups that should still miss), 10 `edge` (typos, casing, punctuation,
//! long strings that should hit).

use crate::record::{Category, DatasetRecord};

#[rustfmt::skip]
const ROWS: &[(&str, &str, &str, bool, Category)] = &[
    // match: paraphrases of the populated question.
    ("what is the capital of france", "capital city of france", "Paris", true, Category::Match),
    ("what is the capital of japan", "japan's capital city", "Tokyo", true, Category::Match),
    ("who wrote romeo and juliet", "author of romeo and juliet", "William Shakespeare", true, Category::Match),
    ("what is the boiling point of water in celsius", "at what temperature does water boil in celsius", "100", true, Category::Match),
    ("how many continents are there", "number of continents on earth", "7", true, Category::Match),
    ("what is the largest planet in the solar system", "biggest planet in our solar system", "Jupiter", true, Category::Match),
    ("what is the speed of light in vacuum", "how fast does light travel in a vacuum", "299792458 m/s", true, Category::Match),
    ("who painted the mona lisa", "artist who painted the mona lisa", "Leonardo da Vinci", true, Category::Match),
    ("what is the chemical symbol for gold", "gold's symbol on the periodic table", "Au", true, Category::Match),
    ("what year did world war two end", "when did ww2 end", "1945", true, Category::Match),
    ("what is the tallest mountain on earth", "highest mountain in the world", "Mount Everest", true, Category::Match),
    ("what is the longest river in the world", "which river is the longest on earth", "The Nile", true, Category::Match),
    ("how many legs does a spider have", "number of legs on a spider", "8", true, Category::Match),
    ("what is the smallest prime number", "which prime number is the smallest", "2", true, Category::Match),
    ("who discovered penicillin", "person who discovered penicillin", "Alexander Fleming", true, Category::Match),
    ("what is the currency of the united kingdom", "what money does the uk use", "Pound sterling", true, Category::Match),
    ("what is the freezing point of water in fahrenheit", "water freezes at what fahrenheit temperature", "32", true, Category::Match),
    ("how many players are on a soccer team", "number of players in a football team", "11", true, Category::Match),
    ("what is the square root of 144", "square root of one hundred forty four", "12", true, Category::Match),
    ("who was the first person on the moon", "first human to walk on the moon", "Neil Armstrong", true, Category::Match),
    ("what is the largest ocean on earth", "biggest ocean in the world", "Pacific Ocean", true, Category::Match),
    ("what gas do plants absorb from the atmosphere", "which gas do plants take in", "Carbon dioxide", true, Category::Match),
    ("how many days are in a leap year", "number of days in a leap year", "366", true, Category::Match),
    ("what is the capital of australia", "australia's capital city", "Canberra", true, Category::Match),
    ("who wrote the origin of species", "author of on the origin of species", "Charles Darwin", true, Category::Match),
    ("what is the hardest natural substance", "hardest naturally occurring material", "Diamond", true, Category::Match),
    ("how many bones are in the adult human body", "number of bones in an adult human", "206", true, Category::Match),
    ("what planet is known as the red planet", "which planet is called the red planet", "Mars", true, Category::Match),
    ("what is the main language spoken in brazil", "what language do brazilians speak", "Portuguese", true, Category::Match),
    ("who invented the telephone", "person credited with inventing the telephone", "Alexander Graham Bell", true, Category::Match),
    ("what is the capital of canada", "canada's capital city", "Ottawa", true, Category::Match),
    ("how many sides does a hexagon have", "number of sides on a hexagon", "6", true, Category::Match),
    ("what is the largest mammal", "biggest mammal on earth", "Blue whale", true, Category::Match),
    ("what is the chemical formula for water", "water's chemical formula", "H2O", true, Category::Match),
    ("who composed the ninth symphony", "composer of symphony number nine", "Ludwig van Beethoven", true, Category::Match),
    ("what is the capital of italy", "italy's capital city", "Rome", true, Category::Match),
    ("how many minutes are in a full day", "number of minutes in 24 hours", "1440", true, Category::Match),
    ("what is the smallest country in the world", "which country is the smallest by area", "Vatican City", true, Category::Match),
    ("what metal is liquid at room temperature", "which metal stays liquid at room temperature", "Mercury", true, Category::Match),
    ("who wrote pride and prejudice", "author of pride and prejudice", "Jane Austen", true, Category::Match),
    // neg: lookups unrelated to anything populated.
    ("what is the capital of spain", "how do i bake sourdough bread", "Madrid", false, Category::Neg),
    ("what is the capital of germany", "best way to train a puppy", "Berlin", false, Category::Neg),
    ("who wrote hamlet", "how to change a car tire", "William Shakespeare", false, Category::Neg),
    ("what is the atomic number of carbon", "what time is it in new york", "6", false, Category::Neg),
    ("what is the deepest ocean trench", "recipe for chocolate chip cookies", "Mariana Trench", false, Category::Neg),
    ("who painted starry night", "how to tie a windsor knot", "Vincent van Gogh", false, Category::Neg),
    ("what is the capital of egypt", "symptoms of the common cold", "Cairo", false, Category::Neg),
    ("how many strings does a violin have", "directions to the nearest airport", "4", false, Category::Neg),
    ("what is the national flower of japan", "how to reset a router password", "Cherry blossom", false, Category::Neg),
    ("who discovered gravity", "lyrics of happy birthday", "Isaac Newton", false, Category::Neg),
    ("what is the tallest building in the world", "how to knit a scarf for beginners", "Burj Khalifa", false, Category::Neg),
    ("what is the chemical symbol for iron", "weather forecast for tomorrow", "Fe", false, Category::Neg),
    ("how many keys are on a standard piano", "price of a first class stamp", "88", false, Category::Neg),
    ("what is the fastest land animal", "how do i update my phone software", "Cheetah", false, Category::Neg),
    ("who wrote war and peace", "best exercises for lower back pain", "Leo Tolstoy", false, Category::Neg),
    // hard-neg: near in form, different entity, must miss.
    ("what is the capital of norway", "what is the capital of sweden", "Oslo", false, Category::HardNeg),
    ("who wrote the great gatsby", "who wrote the grapes of wrath", "F. Scott Fitzgerald", false, Category::HardNeg),
    ("what is the boiling point of ethanol", "what is the boiling point of mercury", "78.37 celsius", false, Category::HardNeg),
    ("how many moons does jupiter have", "how many moons does saturn have", "95", false, Category::HardNeg),
    ("what is the largest desert in the world", "what is the largest lake in the world", "Antarctic Desert", false, Category::HardNeg),
    ("what year did the berlin wall fall", "what year did the berlin wall go up", "1989", false, Category::HardNeg),
    ("what is the currency of switzerland", "what is the currency of sweden", "Swiss franc", false, Category::HardNeg),
    ("who was the first president of the united states", "who was the second president of the united states", "George Washington", false, Category::HardNeg),
    ("what is the melting point of aluminum", "what is the melting point of copper", "660.3 celsius", false, Category::HardNeg),
    ("how tall is mount kilimanjaro", "how tall is mount fuji", "5895 meters", false, Category::HardNeg),
    // edge: typos, casing, punctuation, whitespace, long strings.
    ("what is the capital of india", "WHAT IS THE CAPITAL OF INDIA", "New Delhi", true, Category::Edge),
    ("how many hours are in a week", "how many hours are in a week???", "168", true, Category::Edge),
    ("what is the distance from earth to the moon", "what is the distnace from earth to the moon", "384400 km", true, Category::Edge),
    ("who invented the world wide web", "who invented the world wide web?", "Tim Berners-Lee", true, Category::Edge),
    ("what is the national bird of the united states", "what is the natonal bird of the united states", "Bald eagle", true, Category::Edge),
    ("what is photosynthesis", "What Is Photosynthesis", "Conversion of light into chemical energy", true, Category::Edge),
    ("can you explain in detail the process by which honey bees communicate the location of food sources to other members of their hive", "can you explain in detail the process by which honey bees communicate the location of food sources to the rest of their hive", "The waggle dance", true, Category::Edge),
    ("what is the freezing point of water in celsius", "what is the freezing point of water in celsius.", "0", true, Category::Edge),
    ("how far is the sun from earth", "how  far is the sun from earth", "149.6 million km", true, Category::Edge),
    ("what is the plural of octopus", "whats the plural of octopus", "Octopuses", true, Category::Edge),
];

/// The fixed evaluation dataset.
#[must_use]
pub fn builtin() -> Vec<DatasetRecord> {
    ROWS.iter()
        .map(|&(key, lookup, answer, expected_hit, category)| {
            DatasetRecord::new(key, lookup, answer, expected_hit, category)
        })
        .collect()
}
