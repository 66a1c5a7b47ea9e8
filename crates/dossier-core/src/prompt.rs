//! Prompt templates for the text-generation provider.
//!
//! The provider enforces no output format of its own, so the template is the
//! only lever that makes responses structurally predictable: five numbered
//! sections with fixed titles, Simplified Chinese, a 400-word ceiling, and a
//! references section restricted to two URL shapes that resolve even when
//! the provider is unsure of an exact address (a Wikipedia `Special:Search`
//! link, or a Google `site:` search link).
//!
//! Renderers key off the section titles; treat [`EARTH_SECTIONS`] and
//! [`CELESTIAL_SECTIONS`] as a contract and change them together with any
//! consumer.

use crate::entity::{CelestialOrigin, EarthEvent, Entity};

/// Section titles of the Earth-event report, in mandated order.
pub const EARTH_SECTIONS: [&str; 5] =
    ["事件经过", "实体/飞行器", "证据", "揭秘视角", "核心参考源"];

/// Section titles of the celestial report, in mandated order.
pub const CELESTIAL_SECTIONS: [&str; 5] =
    ["天文数据", "外星关联", "假设文明", "科学异常", "核心参考源"];

/// Word ceiling mandated for the main text of either report.
pub const MAX_WORDS: u32 = 400;

/// Build the provider prompt for an entity.
///
/// Pure and infallible: the template is selected by the entity's variant and
/// interpolates only fields that variant is guaranteed to carry.
pub fn build(entity: &Entity) -> String {
    match entity {
        Entity::Event(event) => earth_prompt(event),
        Entity::Origin(origin) => celestial_prompt(origin),
    }
}

fn earth_prompt(event: &EarthEvent) -> String {
    format!(
        r#"Act as a specialized intelligence analyst summarizing a UAP/UFO event for a classified dossier.

Subject: {title}
Location: {location}
Date: {year}
Context: {context}

Please provide a detailed report in Markdown format in Chinese (Simplified).

Structure the response exactly as follows:
1. **事件经过 (The Incident)**: A detailed chronological account.
2. **实体/飞行器 (The Entities/Craft)**: Description of observed entities or craft.
3. **证据 (The Evidence)**: Radar data, physical traces, witness corroboration.
4. **揭秘视角 (The Disclosure Perspective)**: Connection to the "Age of Disclosure" narrative.
5. **核心参考源 (Key References)**:
   - Provide 3-5 **clickable Markdown links**.
   - **CRITICAL**: To prevent broken links, YOU MUST use the following "Safe Search" URL format for Wikipedia:
     - Format: `[Wikipedia: Event Name](https://en.wikipedia.org/wiki/Special:Search?search=Event+Name&go=Go)`
     - Example: `[Wikipedia: Roswell Incident](https://en.wikipedia.org/wiki/Special:Search?search=Roswell+Incident&go=Go)`
   - For other sources (The Black Vault, etc.), if you are not 100% sure of the specific URL, use a Google Site Search link:
     - Format: `[The Black Vault: Event Name](https://www.google.com/search?q=site:theblackvault.com+Event+Name)`

Keep the tone objective. Limit the main text to {max_words} words.
"#,
        title = event.title,
        location = event.location_name,
        year = event.year,
        context = event.short_desc,
        max_words = MAX_WORDS,
    )
}

fn celestial_prompt(origin: &CelestialOrigin) -> String {
    format!(
        r#"Act as an exobiologist and astronomer analyzing a celestial location of interest regarding non-human intelligence.

Subject: {name}
Designation: {designation}
Distance: {distance}
Context: {context}

Please provide a detailed report in Markdown format in Chinese (Simplified).

Structure the response exactly as follows:
1. **天文数据 (Astronomical Data)**: Scientific characteristics.
2. **外星关联 (The Connection)**: Links to extraterrestrials (e.g., signals, lore).
3. **假设文明 (Hypothetical Civilizations)**: Lore surrounding the beings (e.g., Greys).
4. **科学异常 (Scientific Anomalies)**: Real-world scientific oddities.
5. **核心参考源 (Key References)**:
   - Provide 3-5 **clickable Markdown links**.
   - **CRITICAL**: To prevent broken links, YOU MUST use the following "Safe Search" URL format for Wikipedia:
     - Format: `[Wikipedia: Object Name](https://en.wikipedia.org/wiki/Special:Search?search=Object+Name&go=Go)`
     - Example: `[Wikipedia: Zeta Reticuli](https://en.wikipedia.org/wiki/Special:Search?search=Zeta+Reticuli&go=Go)`
   - For other sources (NASA, ESA), use Google Site Search if unsure of the direct link:
     - Format: `[NASA: Object Name](https://www.google.com/search?q=site:nasa.gov+Object+Name)`

Keep the tone scientific yet open. Limit the main text to {max_words} words.
"#,
        name = origin.name,
        designation = origin.designation,
        distance = origin.distance,
        context = origin.short_desc,
        max_words = MAX_WORDS,
    )
}
