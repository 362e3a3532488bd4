/// Style names accepted by the marketplace `style` filter
pub const MARKETPLACE_STYLES: &[&str] = &[
    "Abstract",
    "Acid",
    "Acid House",
    "Acid Jazz",
    "Acoustic",
    "African",
    "Afro-Cuban",
    "Afrobeat",
    "Alternative Rock",
    "Ambient",
    "Art Rock",
    "Avant-garde Jazz",
    "Avantgarde",
    "Balearic",
    "Baroque",
    "Bass Music",
    "Beat",
    "Big Band",
    "Black Metal",
    "Bluegrass",
    "Blues Rock",
    "Boogie",
    "Bossa Nova",
    "Breakbeat",
    "Breakcore",
    "Breaks",
    "Britpop",
    "Chanson",
    "Chicago Blues",
    "Chillwave",
    "Classic Rock",
    "Classical",
    "Contemporary",
    "Contemporary Jazz",
    "Contemporary R&B",
    "Country",
    "Country Rock",
    "Cumbia",
    "Dancehall",
    "Dark Ambient",
    "Darkwave",
    "Death Metal",
    "Deep House",
    "Deep Techno",
    "Disco",
    "Doom Metal",
    "Downtempo",
    "Drone",
    "Drum n Bass",
    "Dub",
    "Dub Techno",
    "Dubstep",
    "EBM",
    "Electro",
    "Electro House",
    "Emo",
    "Euro House",
    "Euro-Disco",
    "Experimental",
    "Field Recording",
    "Folk",
    "Folk Rock",
    "Free Improvisation",
    "Free Jazz",
    "Funk",
    "Fusion",
    "Garage House",
    "Garage Rock",
    "Glam",
    "Goa Trance",
    "Gospel",
    "Goth Rock",
    "Grime",
    "Grindcore",
    "Grunge",
    "Hard Bop",
    "Hard House",
    "Hard Rock",
    "Hard Techno",
    "Hard Trance",
    "Hardcore",
    "Hardcore Hip-Hop",
    "Heavy Metal",
    "Hi NRG",
    "Hip Hop",
    "Hip-House",
    "House",
    "IDM",
    "Indie Pop",
    "Indie Rock",
    "Industrial",
    "Italo House",
    "Italo-Disco",
    "Jazz-Funk",
    "Jazz-Rock",
    "Jungle",
    "Krautrock",
    "Latin Jazz",
    "Leftfield",
    "Lo-Fi",
    "Lounge",
    "Minimal",
    "Minimal Techno",
    "Modal",
    "Modern Classical",
    "Musique Concrète",
    "Neo Soul",
    "Neo-Classical",
    "New Age",
    "New Wave",
    "Noise",
    "Nu-Disco",
    "Post Bop",
    "Post Rock",
    "Post-Punk",
    "Power Electronics",
    "Pop Rap",
    "Pop Rock",
    "Progressive House",
    "Progressive Rock",
    "Progressive Trance",
    "Psy-Trance",
    "Psychedelic Rock",
    "Punk",
    "Reggae",
    "Rhythm & Blues",
    "Rock & Roll",
    "Rocksteady",
    "Roots Reggae",
    "Salsa",
    "Samba",
    "Shoegaze",
    "Ska",
    "Soul",
    "Soul-Jazz",
    "Soundtrack",
    "Speed Garage",
    "Spoken Word",
    "Synth-pop",
    "Synthwave",
    "Tech House",
    "Techno",
    "Thrash",
    "Trance",
    "Tribal",
    "Trip Hop",
    "UK Garage",
    "Vaporwave",
];
