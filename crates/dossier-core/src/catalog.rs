//! The curated catalog of Earth events and celestial origins.
//!
//! This is the fixed data set behind the globe and galaxy views. The warm-up
//! driver and the static-file generator iterate it; the live endpoint accepts
//! any well-formed entity but in practice only ever sees these.
//!
//! Invariant: `id` values are unique across the union of both lists; they
//! are the cache keys.

use crate::entity::{CelestialOrigin, EarthEvent, Entity, EventKind, OriginKind};

fn event(
    id: &str,
    title: &str,
    year: &str,
    location_name: &str,
    short_desc: &str,
    image: Option<&str>,
    is_ai: Option<bool>,
    kind: EventKind,
) -> EarthEvent {
    EarthEvent {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        location_name: location_name.to_string(),
        short_desc: short_desc.to_string(),
        image: image.map(str::to_string),
        is_ai,
        kind,
    }
}

fn origin(
    id: &str,
    name: &str,
    designation: &str,
    distance: &str,
    short_desc: &str,
    associated_beings: Option<&str>,
    kind: OriginKind,
) -> CelestialOrigin {
    CelestialOrigin {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        distance: distance.to_string(),
        short_desc: short_desc.to_string(),
        associated_beings: associated_beings.map(str::to_string),
        image: None,
        is_ai: None,
        kind,
    }
}

/// The documented Earth events, in catalog order.
pub fn uap_events() -> Vec<EarthEvent> {
    vec![
        event(
            "roswell",
            "罗斯威尔事件",
            "1947",
            "美国, 新墨西哥州, 罗斯威尔",
            "涉及奇异材料和生物实体的坠毁回收事件。",
            Some("/archives/roswell-real.jpg"),
            None,
            EventKind::Crash,
        ),
        event(
            "varginha",
            "瓦吉尼亚事件",
            "1996",
            "巴西, 米纳斯吉拉斯州, 瓦吉尼亚",
            "被称为“巴西的罗斯威尔”。多名目击者报告看到奇怪的生物；据称军方捕获了实体。",
            Some("/archives/varginha-real.jpg"),
            None,
            EventKind::Crash,
        ),
        event(
            "betty-barney",
            "希尔夫妇绑架案",
            "1961",
            "美国, 新罕布什尔州",
            "第一起广为人知的外星人绑架报告。贝蒂·希尔绘制的星图指向网罟座泽塔星。",
            Some("/archives/betty-barney.jpg"),
            None,
            EventKind::Abduction,
        ),
        event(
            "colares",
            "普拉托行动 (柯拉瑞斯岛)",
            "1977",
            "巴西, 柯拉瑞斯岛",
            "军方调查攻击当地人的侵略性发光物体。被称为“Chupa Chupa”。",
            Some("/archives/colares-authentic.png"),
            Some(false),
            EventKind::Sighting,
        ),
        event(
            "rendlesham",
            "蓝道申森林事件",
            "1980",
            "英国, 萨福克郡",
            "美国空军人员在伍德布里奇皇家空军基地附近多次目击。发现物理痕迹。下载了二进制代码。",
            Some("/archives/rendlesham-authentic.png"),
            Some(false),
            EventKind::Contact,
        ),
        event(
            "belgian-wave",
            "比利时不明飞行物潮",
            "1989-1990",
            "比利时, 欧本",
            "大规模目击巨大的黑色三角形物体。F-16战机雷达锁定物体，物体进行了不可能的机动。",
            Some("/archives/belgian-wave.jpg"),
            None,
            EventKind::Sighting,
        ),
        event(
            "tehran-1976",
            "德黑兰UFO事件",
            "1976",
            "伊朗, 德黑兰",
            "伊朗帝国空军战机试图拦截UFO。接近时武器系统和电子设备失灵。",
            Some("/archives/tehran.png"),
            Some(true),
            EventKind::Sighting,
        ),
        event(
            "westall",
            "韦斯托尔学校目击案",
            "1966",
            "澳大利亚, 墨尔本",
            "超过200名学生和老师目睹一个碟形飞行器降落在围场并起飞。",
            Some("/archives/westall.png"),
            Some(true),
            EventKind::Sighting,
        ),
        event(
            "cattle-mute-co",
            "圣路易斯谷家畜肢解案",
            "1967-Present",
            "美国, 科罗拉多州",
            "大量无法解释的牲畜外科手术式肢解案件集中地（如Snippy马案）。",
            Some("/archives/snippy-authentic.png"),
            Some(false),
            EventKind::Mutilation,
        ),
        event(
            "phoenix-lights",
            "凤凰城光点",
            "1997",
            "美国, 亚利桑那州, 凤凰城",
            "大规模目击巨大的V形飞行器静默地滑过城市上空。",
            Some("/archives/phoenix-lights-authentic.png"),
            Some(false),
            EventKind::Sighting,
        ),
        event(
            "ariel-school",
            "阿里尔学校事件",
            "1994",
            "津巴布韦, 鲁瓦",
            "62名学童目睹飞行器降落，并与其乘员进行了关于环境保护的心灵感应交流。",
            Some("/archives/ariel-school.png"),
            Some(true),
            EventKind::Contact,
        ),
        event(
            "tic-tac",
            "尼米兹号 \"Tic Tac\" 事件",
            "2004",
            "美国, 圣地亚哥海岸",
            "F-18飞行员的雷达目视遭遇。物体展示了瞬间加速能力。AATIP已确认。",
            Some("/archives/tic-tac-real-v2.png"),
            None,
            EventKind::Sighting,
        ),
        event(
            "washington-flap",
            "华盛顿特区不明飞行物",
            "1952",
            "美国, 华盛顿特区",
            "UFO连续几个周末在白宫和国会大厦上空盘旋。喷气式飞机紧急升空；雷达确认。",
            Some("/archives/washington-1952-authentic.png"),
            Some(false),
            EventKind::Sighting,
        ),
        event(
            "kaikoura",
            "凯库拉光点",
            "1978",
            "新西兰, 凯库拉",
            "电视台工作人员从飞机上拍摄。空中交通管制雷达追踪到了物体。",
            Some("/archives/kaikoura.png"),
            Some(true),
            EventKind::Sighting,
        ),
        event(
            "trans-en-provence",
            "普罗旺斯高地事件",
            "1981",
            "法国, 普罗旺斯",
            "最科学分析的物理痕迹案例之一 (GEPAN)。确认了地面加热和植物创伤。",
            Some("/archives/trans-en-provence-generated.png"),
            Some(true),
            EventKind::Contact,
        ),
    ]
}

/// The celestial origins shown in the galaxy view, in catalog order.
pub fn celestial_origins() -> Vec<CelestialOrigin> {
    vec![
        origin(
            "zeta-reticuli",
            "网罟座泽塔星系 (Zeta Reticuli)",
            "双星系统",
            "39.3 光年",
            "由贝蒂·希尔的星图确认。通常被认为是小灰人外星人的家乡星系。",
            Some("小灰人 (Ebens)"),
            OriginKind::Homeworld,
        ),
        origin(
            "wow-signal",
            "Wow! 信号源 (Wow! Source)",
            "人马座 Chi (大约)",
            "1,800 光年",
            "1977年探测到的强窄带无线电信号，具有人造起源的特征。",
            Some("未知"),
            OriginKind::Signal,
        ),
        origin(
            "pleiades",
            "昂宿星团 (The Pleiades)",
            "M45 疏散星团",
            "444 光年",
            "在接触者传说中经常提到，是仁慈的、人类外观实体的家园。",
            Some("北欧型外星人 (Nordics) / 昂宿星人"),
            OriginKind::Homeworld,
        ),
        origin(
            "sirius",
            "天狼星系 (Sirius System)",
            "大犬座 Alpha",
            "8.6 光年",
            "马里的多贡部落在几个世纪前就拥有关于这颗看不见的伴星（天狼星B）的先进知识。",
            Some("Nommos (多贡神话)"),
            OriginKind::Homeworld,
        ),
        origin(
            "oumuamua",
            "奥陌陌 ('Oumuamua)",
            "1I/2017 U1",
            "正在远离",
            "已知的第一个经过太阳系的星际物体。表现出非引力加速。",
            Some("自动化探测器?"),
            OriginKind::Anomaly,
        ),
        origin(
            "tabbys-star",
            "塔比星 (Tabby's Star)",
            "KIC 8462852",
            "1,470 光年",
            "恒星表现出不稳定的、巨大的亮度下降（高达22%），导致了外星巨型结构的假设。",
            Some("戴森球建造者?"),
            OriginKind::Anomaly,
        ),
        origin(
            "proxima-b",
            "比邻星系 (Proxima Centauri)",
            "半人马座 Alpha C",
            "4.2 光年",
            "已知最近的宜居带系外行星。2019年探测到 \"BLC-1\" 信号（可能是干扰，但意义重大）。",
            Some("拟议的邻居"),
            OriginKind::Homeworld,
        ),
    ]
}

/// The full catalog, events first, as the warm-up driver walks it.
pub fn all() -> Vec<Entity> {
    uap_events()
        .into_iter()
        .map(Entity::Event)
        .chain(celestial_origins().into_iter().map(Entity::Origin))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_counts() {
        assert_eq!(uap_events().len(), 15);
        assert_eq!(celestial_origins().len(), 7);
        assert_eq!(all().len(), 22);
    }

    #[test]
    fn cache_keys_are_unique_across_both_lists() {
        let entries = all();
        let keys: HashSet<String> = entries.iter().map(Entity::cache_key).collect();
        assert_eq!(keys.len(), entries.len());
    }

    #[test]
    fn every_entry_has_a_nonempty_slug_id() {
        for entry in all() {
            let id = entry.id().to_string();
            assert!(!id.is_empty());
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "id {id:?} is not slug-form"
            );
            // Slug ids never hit the name-based fallback.
            assert_eq!(entry.cache_key(), id);
        }
    }

    #[test]
    fn catalog_round_trips_through_wire_json() {
        for entry in all() {
            let json = serde_json::to_string(&entry).unwrap();
            let back: Entity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, entry);
        }
    }
}
