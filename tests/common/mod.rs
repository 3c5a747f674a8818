// Shared fixtures for the integration tests

#![allow(dead_code)]

/// Pseudo-random lowercase sentences (six five-letter words). Distinct
/// sentences share almost no 4-gram, which makes alignments predictable.
pub fn synthetic_sentences(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        let mut words = Vec::with_capacity(6);
        for _ in 0..6 {
            let mut word = String::with_capacity(5);
            for _ in 0..5 {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                word.push((b'a' + ((state >> 33) % 26) as u8) as char);
            }
            words.push(word);
        }
        sentences.push(words.join(" "));
    }
    sentences
}

pub const ENGLISH: [&str; 24] = [
    "The village lies at the foot of a steep mountain.",
    "Every morning the baker opens his shop before dawn.",
    "Children walk to school along the narrow river path.",
    "In winter the snow covers the roofs for several weeks.",
    "The old church bell rings twelve times at noon.",
    "Farmers bring vegetables to the market on Saturday.",
    "A small library was built next to the town hall.",
    "The mayor announced a new bridge across the river.",
    "Tourists come in summer to climb the northern peaks.",
    "The train station was closed during the long war.",
    "My grandmother remembers the first electric lamps.",
    "Wolves were sometimes seen near the forest edge.",
    "The school teacher organised a concert in June.",
    "Heavy rain destroyed part of the harvest last year.",
    "A doctor visits the village twice a month.",
    "The museum displays tools used by ancient shepherds.",
    "Young people often leave to find work in the city.",
    "The road to the valley was finally paved in 1962.",
    "Each autumn the families gather chestnuts together.",
    "The fountain in the square has never run dry.",
    "Musicians from the capital played at the festival.",
    "The post office delivers letters only in the afternoon.",
    "A fire damaged the wooden mill in the spring of 1901.",
    "Today the village counts fewer than three hundred inhabitants.",
];

pub const FRENCH: [&str; 24] = [
    "Le village se trouve au pied d'une montagne escarpée.",
    "Chaque matin le boulanger ouvre sa boutique avant l'aube.",
    "Les enfants vont à l'école par l'étroit chemin de la rivière.",
    "En hiver la neige couvre les toits pendant plusieurs semaines.",
    "La vieille cloche de l'église sonne douze coups à midi.",
    "Les agriculteurs apportent leurs légumes au marché le samedi.",
    "Une petite bibliothèque a été construite à côté de la mairie.",
    "Le maire a annoncé un nouveau pont sur la rivière.",
    "Les touristes viennent en été pour escalader les sommets du nord.",
    "La gare a été fermée pendant la longue guerre.",
    "Ma grand-mère se souvient des premières lampes électriques.",
    "On voyait parfois des loups à la lisière de la forêt.",
    "L'instituteur a organisé un concert en juin.",
    "De fortes pluies ont détruit une partie de la récolte l'an dernier.",
    "Un médecin visite le village deux fois par mois.",
    "Le musée expose des outils utilisés par les anciens bergers.",
    "Les jeunes partent souvent chercher du travail en ville.",
    "La route de la vallée a enfin été goudronnée en 1962.",
    "Chaque automne les familles ramassent ensemble les châtaignes.",
    "La fontaine de la place ne s'est jamais tarie.",
    "Des musiciens de la capitale ont joué au festival.",
    "La poste ne distribue le courrier que l'après-midi.",
    "Un incendie a endommagé le moulin en bois au printemps 1901.",
    "Aujourd'hui le village compte moins de trois cents habitants.",
];
