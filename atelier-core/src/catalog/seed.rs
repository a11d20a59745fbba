//! The authored collection table.
//!
//! Everything the catalog serves derives from these literals; there is no
//! other content source in the process.

pub(crate) struct CollectionSeed {
    pub id: &'static str,
    pub slug: &'static str,
    /// On-disk folder name. Casing and spacing follow the export tool that
    /// produced the files, not the slug.
    pub folder: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub photo_count: u32,
    /// Default file extension for the collection's images and cover.
    pub extension: &'static str,
    /// Index sub-ranges whose files were exported with a different
    /// extension. Authoring data keyed by range, not a general rule.
    pub extension_overrides: &'static [ExtensionOverride],
}

pub(crate) struct ExtensionOverride {
    pub start: u32,
    pub end: u32,
    pub extension: &'static str,
}

impl ExtensionOverride {
    pub(crate) fn covers(&self, index: u32) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

pub(crate) const SEED: &[CollectionSeed] = &[
    CollectionSeed {
        id: "1",
        slug: "new-zealand",
        folder: "new zealand",
        title: "New Zealand Landscapes",
        description: "Breathtaking landscapes from across New Zealand",
        full_description: "New Zealand offers some of the most diverse and dramatic landscapes \
            in the world. From the snow-capped Southern Alps to the pristine beaches of the \
            Coromandel Peninsula, this collection captures the raw beauty and majesty of Aotearoa.",
        tags: &["Nature", "Landscape", "Mountains"],
        featured: true,
        photo_count: 18,
        extension: "jpg",
        extension_overrides: &[],
    },
    CollectionSeed {
        id: "2",
        slug: "tokyo",
        folder: "Tokyo",
        title: "Japan: Urban & Traditional",
        description: "The contrast between modern and traditional Japan",
        full_description: "Japan presents a fascinating juxtaposition of ultramodern urban \
            environments and serene traditional settings. This collection explores the visual \
            dialogue between Tokyo's neon-lit streets and the tranquil temples of Kyoto, \
            capturing Japan's unique cultural identity.",
        tags: &["Urban", "Culture", "Architecture"],
        featured: true,
        photo_count: 20,
        extension: "jpg",
        extension_overrides: &[],
    },
    CollectionSeed {
        id: "3",
        slug: "bali",
        folder: "Bali",
        title: "Bali: Island of the Gods",
        description: "Tropical paradise and cultural heritage of Bali",
        full_description: "Known as the Island of the Gods, Bali captivates with its dramatic \
            landscapes, vibrant cultural heritage, and spiritual atmosphere. This collection \
            documents the island's terraced rice fields, ancient temples, pristine beaches, \
            and the warmth of Balinese people.",
        tags: &["Tropical", "Culture", "Nature"],
        featured: true,
        photo_count: 16,
        extension: "jpeg",
        // A mid-collection re-export left indices 10-15 as .jpg.
        extension_overrides: &[ExtensionOverride {
            start: 10,
            end: 15,
            extension: "jpg",
        }],
    },
    CollectionSeed {
        id: "4",
        slug: "iceland",
        folder: "Iceland",
        title: "Iceland: Land of Fire and Ice",
        description: "Dramatic landscapes of Iceland",
        full_description: "Iceland's otherworldly landscapes showcase nature's raw power and \
            beauty. This collection captures the country's dramatic contrasts: steaming \
            geothermal areas alongside massive glaciers, thundering waterfalls cutting through \
            black lava fields, and the ethereal Northern Lights dancing above it all.",
        tags: &["Nature", "Landscape", "Winter"],
        featured: false,
        photo_count: 14,
        extension: "jpg",
        extension_overrides: &[],
    },
    CollectionSeed {
        id: "5",
        slug: "morocco",
        folder: "Morocco",
        title: "Colors of Morocco",
        description: "Vibrant markets, architecture, and desert landscapes",
        full_description: "Morocco is a feast for the senses, with its vibrant colors, \
            intricate patterns, and diverse landscapes. This collection explores the bustling \
            medinas, ancient kasbahs, vast Sahara dunes, and the rich cultural tapestry that \
            makes Morocco so visually captivating.",
        tags: &["Culture", "Desert", "Architecture"],
        featured: false,
        photo_count: 21,
        extension: "webp",
        extension_overrides: &[],
    },
    CollectionSeed {
        id: "6",
        slug: "urban-portraits",
        folder: "Urban Portraits",
        title: "Urban Portraits",
        description: "Street photography and urban life around the world",
        full_description: "This collection focuses on the human element within urban \
            environments. Through candid street photography and environmental portraits, it \
            captures the diversity, energy, and stories of city dwellers across different \
            cultures and metropolises around the world.",
        tags: &["Urban", "People", "Street"],
        featured: false,
        photo_count: 16,
        extension: "jpg",
        extension_overrides: &[],
    },
];
