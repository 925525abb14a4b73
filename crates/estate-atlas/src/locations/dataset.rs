//! Built-in location tables. Declaration order is significant: search and
//! listing results preserve it within each level.

use super::domain::{Area, City, Compound, TopLevelRegion};

pub const CITIES: &[City] = &[
    City { id: "cairo", name: "Cairo", region: "Greater Cairo" },
    City { id: "new-cairo", name: "New Cairo", region: "Greater Cairo" },
    City { id: "new-capital", name: "New Administrative Capital", region: "Greater Cairo" },
    City { id: "giza", name: "Giza", region: "Giza" },
    City { id: "sheikh-zayed", name: "Sheikh Zayed", region: "Giza" },
    City { id: "october", name: "6th of October", region: "Giza" },
    City { id: "alexandria", name: "Alexandria", region: "Alexandria" },
    City { id: "new-alamein", name: "New Alamein", region: "North Coast" },
    City { id: "sidi-abdel-rahman", name: "Sidi Abdel Rahman", region: "North Coast" },
    City { id: "ras-el-hekma", name: "Ras El Hekma", region: "North Coast" },
    City { id: "el-dabaa", name: "El Dabaa", region: "North Coast" },
    City { id: "ain-sokhna", name: "Ain Sokhna", region: "Red Sea" },
    City { id: "hurghada", name: "Hurghada", region: "Red Sea" },
];

pub const AREAS: &[Area] = &[
    // Cairo
    Area { id: "cai-maadi", name: "Maadi", city_id: "cairo" },
    Area { id: "cai-zamalek", name: "Zamalek", city_id: "cairo" },
    Area { id: "cai-heliopolis", name: "Heliopolis", city_id: "cairo" },
    Area { id: "cai-nasr-city", name: "Nasr City", city_id: "cairo" },
    // New Cairo
    Area { id: "nc-5th-settlement", name: "5th Settlement", city_id: "new-cairo" },
    Area { id: "nc-1st-settlement", name: "1st Settlement", city_id: "new-cairo" },
    Area { id: "nc-3rd-settlement", name: "3rd Settlement", city_id: "new-cairo" },
    Area { id: "nc-rehab", name: "Al Rehab", city_id: "new-cairo" },
    Area { id: "nc-madinaty", name: "Madinaty", city_id: "new-cairo" },
    Area { id: "nc-shorouk", name: "El Shorouk", city_id: "new-cairo" },
    Area { id: "nc-mostakbal", name: "Mostakbal City", city_id: "new-cairo" },
    // New Administrative Capital
    Area { id: "nac-r7", name: "R7", city_id: "new-capital" },
    Area { id: "nac-downtown", name: "Capital Downtown", city_id: "new-capital" },
    // Giza
    Area { id: "giz-dokki", name: "Dokki", city_id: "giza" },
    Area { id: "giz-mohandessin", name: "Mohandessin", city_id: "giza" },
    // Sheikh Zayed
    Area { id: "sz-general", name: "Sheikh Zayed", city_id: "sheikh-zayed" },
    Area { id: "sz-new-zayed", name: "New Zayed", city_id: "sheikh-zayed" },
    // 6th of October
    Area { id: "oct-general", name: "6th of October", city_id: "october" },
    Area { id: "oct-hadayek", name: "Hadayek October", city_id: "october" },
    // Alexandria
    Area { id: "alex-smouha", name: "Smouha", city_id: "alexandria" },
    Area { id: "alex-sidi-gaber", name: "Sidi Gaber", city_id: "alexandria" },
    // North Coast
    Area { id: "ala-coast", name: "Alamein Coast", city_id: "new-alamein" },
    Area { id: "sar-bay", name: "Sidi Abdel Rahman Bay", city_id: "sidi-abdel-rahman" },
    Area { id: "reh-coast", name: "Ras El Hekma Coast", city_id: "ras-el-hekma" },
    Area { id: "dab-coast", name: "El Dabaa Coast", city_id: "el-dabaa" },
    // Red Sea
    Area { id: "sok-galala", name: "Galala", city_id: "ain-sokhna" },
    Area { id: "sok-road", name: "Sokhna Road", city_id: "ain-sokhna" },
    Area { id: "hur-gouna", name: "El Gouna", city_id: "hurghada" },
    Area { id: "hur-sahl-hasheesh", name: "Sahl Hasheesh", city_id: "hurghada" },
];

pub const COMPOUNDS: &[Compound] = &[
    // 5th Settlement
    Compound { id: "mivida", name: "Mivida", area_id: "nc-5th-settlement" },
    Compound { id: "hyde-park", name: "Hyde Park", area_id: "nc-5th-settlement" },
    Compound { id: "lake-view", name: "Lake View", area_id: "nc-5th-settlement" },
    Compound { id: "eastown", name: "Eastown", area_id: "nc-5th-settlement" },
    Compound { id: "katameya-heights", name: "Katameya Heights", area_id: "nc-5th-settlement" },
    Compound { id: "villette", name: "Villette", area_id: "nc-5th-settlement" },
    // Mostakbal City
    Compound { id: "bloomfields", name: "Bloomfields", area_id: "nc-mostakbal" },
    Compound { id: "mountain-view-icity", name: "Mountain View iCity", area_id: "nc-mostakbal" },
    // New Administrative Capital
    Compound { id: "capital-gardens", name: "Capital Gardens", area_id: "nac-r7" },
    // Sheikh Zayed
    Compound { id: "allegria", name: "Allegria", area_id: "sz-general" },
    Compound { id: "beverly-hills", name: "Beverly Hills", area_id: "sz-general" },
    Compound { id: "etapa", name: "Etapa", area_id: "sz-general" },
    Compound { id: "karma", name: "Karma", area_id: "sz-general" },
    Compound { id: "greens", name: "Greens", area_id: "sz-general" },
    Compound { id: "sodic-west", name: "Sodic West", area_id: "sz-general" },
    Compound { id: "zed-west", name: "Zed West", area_id: "sz-new-zayed" },
    // 6th of October
    Compound { id: "palm-hills-october", name: "Palm Hills October", area_id: "oct-general" },
    Compound { id: "o-west", name: "O West", area_id: "oct-general" },
    Compound { id: "badya", name: "Badya", area_id: "oct-general" },
    // North Coast
    Compound { id: "mazarine", name: "Mazarine", area_id: "ala-coast" },
    Compound { id: "marassi", name: "Marassi", area_id: "sar-bay" },
    Compound { id: "hacienda-bay", name: "Hacienda Bay", area_id: "sar-bay" },
    Compound { id: "seashell", name: "Seashell", area_id: "reh-coast" },
    Compound { id: "caesar", name: "Caesar", area_id: "reh-coast" },
    // Red Sea
    Compound { id: "il-monte-galala", name: "Il Monte Galala", area_id: "sok-galala" },
    Compound { id: "la-vista-gardens", name: "La Vista Gardens", area_id: "sok-road" },
];

pub const TOP_LEVEL_REGIONS: &[TopLevelRegion] = &[
    TopLevelRegion {
        id: "cairo",
        name: "Cairo",
        city_ids: &["cairo", "new-cairo", "new-capital"],
    },
    TopLevelRegion {
        id: "giza",
        name: "Giza",
        city_ids: &["giza", "sheikh-zayed", "october"],
    },
    TopLevelRegion {
        id: "alexandria",
        name: "Alexandria",
        city_ids: &["alexandria"],
    },
    TopLevelRegion {
        id: "north-coast",
        name: "North Coast \u{2013} Sahel",
        city_ids: &["new-alamein", "sidi-abdel-rahman", "ras-el-hekma", "el-dabaa"],
    },
    TopLevelRegion {
        id: "ain-sokhna",
        name: "Ain Sokhna",
        city_ids: &["ain-sokhna"],
    },
    TopLevelRegion {
        id: "red-sea",
        name: "Red Sea",
        city_ids: &["hurghada"],
    },
];
