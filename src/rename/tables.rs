//! Static keyword tables used by the classifiers
//!
//! Every table is ordered: the first rule whose keyword set matches wins, so
//! entries with broader keywords (e.g. "US", "港") sit after narrower ones.

/// A canonical label together with the substrings that select it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub const fn new(label: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { label, keywords }
    }
}

/// A city with its English label and Chinese keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub en: &'static str,
    pub cn: &'static str,
}

impl City {
    pub const fn new(en: &'static str, cn: &'static str) -> Self {
        Self { en, cn }
    }
}

/// Label returned by lookups that found nothing
pub const UNKNOWN: &str = "Unknown";

/// Coarse label that flags a node as domestic
pub const CHINA_MAINLAND: &str = "China Mainland";

/// Provider rules, matched against the hostname
pub const PROVIDERS: &[KeywordRule] = &[
    KeywordRule::new("Example0cloud", &[".example0.", ".demo0."]),
    KeywordRule::new("Example1cloud", &[".example1.", ".demo1."]),
];

/// Marker selecting tier 1
pub const TIER_ONE_MARKERS: &[&str] = &["VIP2"];

/// Domestic cities, used both as exact locations and as NAT hops
pub const DOMESTIC_CITIES: &[City] = &[
    City::new("Jiangsu", "江苏"),
    City::new("Beijing", "北京"),
    City::new("Shanghai", "上海"),
    City::new("Guangzhou", "广州"),
    City::new("Shenzhen", "深圳"),
    City::new("Hangzhou", "杭州"),
    City::new("Changzhou", "常州"),
    City::new("Xuzhou", "徐州"),
    City::new("Qingdao", "青岛"),
    City::new("Ningbo", "宁波"),
    City::new("Zhenjiang", "镇江"),
    City::new("Chengdu", "成都"),
    City::new("Changsha", "长沙"),
    City::new("Yunfu", "云浮"),
];

/// Country and region rules, matched against the remark
pub const COUNTRIES: &[KeywordRule] = &[
    KeywordRule::new("Ascension", &["Ascension", "阿森松"]),
    KeywordRule::new("Argentina", &["Argentina", "阿根廷"]),
    KeywordRule::new("Austria", &["Austria", "Vienna", "奥地利", "维也纳"]),
    KeywordRule::new("Australia", &["Australia", "Sydney", "澳大利亚", "澳洲", "悉尼"]),
    KeywordRule::new("Belgium", &["Belgium", "比利时"]),
    KeywordRule::new("Brazil", &["Brazil", "Paulo", "巴西", "圣保罗"]),
    KeywordRule::new(
        "Canada",
        &["Canada", "Montreal", "Vancouver", "加拿大", "蒙特利尔", "温哥华", "楓葉", "枫叶"],
    ),
    KeywordRule::new("Switzerland", &["Switzerland", "Zurich", "瑞士", "苏黎世"]),
    KeywordRule::new("Germany", &["Germany", "Frankfurt", "法兰克福", "德"]),
    KeywordRule::new("Denmark", &["Denmark", "丹麦"]),
    KeywordRule::new("Spain", &["Spain", "西班牙"]),
    KeywordRule::new("Europe", &["Europe", "欧洲"]),
    KeywordRule::new("Finland", &["Finland", "Helsinki", "芬兰", "赫尔辛基"]),
    KeywordRule::new("France", &["France", "Paris", "法国", "巴黎"]),
    KeywordRule::new("Indonesia", &["Indonesia", "Jakarta", "印尼", "印度尼西亚", "雅加达"]),
    KeywordRule::new("Ireland", &["Ireland", "Dublin", "爱尔兰", "都柏林"]),
    KeywordRule::new("India", &["India", "Mumbai", "印度", "孟买"]),
    KeywordRule::new("Italy", &["Italy", "Milan", "意大利", "米兰"]),
    KeywordRule::new("North Korea", &["NorthKorea", "朝鲜"]),
    KeywordRule::new("Korea", &["Korea", "Seoul", "KOR", "首尔", "韩", "韓"]),
    KeywordRule::new("China Macao", &["Macao", "澳门", "CTM"]),
    KeywordRule::new("Malaysia", &["Malaysia", "马来西亚"]),
    KeywordRule::new("Netherlands", &["Netherlands", "Amsterdam", "荷兰", "阿姆斯特丹"]),
    KeywordRule::new("Philippines", &["Philippines", "菲律宾"]),
    KeywordRule::new("Romania", &["Romania", "罗马尼亚"]),
    KeywordRule::new("Arabia", &["Arabia", "沙特"]),
    KeywordRule::new("Dubai", &["Dubai", "迪拜"]),
    KeywordRule::new("Sweden", &["Sweden", "瑞典"]),
    KeywordRule::new("Thailand", &["Thailand", "Bangkok", "泰国", "曼谷"]),
    KeywordRule::new("Turkey", &["Turkey", "Istanbul", "土耳其", "伊斯坦布尔"]),
    KeywordRule::new("Vietnam", &["Vietnam", "越南"]),
    KeywordRule::new("South Africa", &["Africa", "南非"]),
    KeywordRule::new(
        "United Kingdom",
        &["UK", "England", "UnitedKingdom", "London", "英", "伦敦"],
    ),
    KeywordRule::new(
        "Japan",
        &["JP", "Japan", "Tokyo", "Osaka", "Saitama", "日本", "东京", "大阪", "埼玉", "日"],
    ),
    KeywordRule::new("Singapore", &["SG", "Singapore", "新加坡", "狮城", "新"]),
    KeywordRule::new(
        "Russia",
        &[
            "RU",
            "Russia",
            "Moscow",
            "Petersburg",
            "Siberia",
            "伯力",
            "莫斯科",
            "圣彼得堡",
            "西伯利亚",
            "新西伯利亚",
            "哈巴罗夫斯克",
            "俄罗斯",
            "俄",
        ],
    ),
    KeywordRule::new(
        "United States",
        &[
            "US",
            "America",
            "UnitedStates",
            "Portland",
            "Dallas",
            "Oregon",
            "Phoenix",
            "Fremont",
            "SiliconValley",
            "LasVegas",
            "LosAngeles",
            "SanJose",
            "SantaClara",
            "Seattle",
            "Chicago",
            "美国",
            "美",
            "波特兰",
            "达拉斯",
            "俄勒冈",
            "凤凰城",
            "费利蒙",
            "弗里蒙特",
            "硅谷",
            "拉斯维加斯",
            "洛杉矶",
            "圣何塞",
            "圣荷西",
            "圣克拉拉",
            "西雅图",
            "芝加哥",
        ],
    ),
    KeywordRule::new("China Taiwan", &["TW", "Taiwan", "新北", "彰化", "CHT", "台", "HINET"]),
    KeywordRule::new(
        "China Hong Kong",
        &["HK", "HongKong", "HKT", "HKBN", "HGC", "WTT", "CMI", "港"],
    ),
    KeywordRule::new(
        CHINA_MAINLAND,
        &[
            "CN",
            "China",
            "Jiangsu",
            "Beijing",
            "Shanghai",
            "Guangzhou",
            "Shenzhen",
            "Hangzhou",
            "Changzhou",
            "Xuzhou",
            "Qingdao",
            "Ningbo",
            "Zhenjiang",
            "Chengdu",
            "Changsha",
            "Yunfu",
            "回国",
            "中国",
            "江苏",
            "北京",
            "上海",
            "广州",
            "深圳",
            "杭州",
            "常州",
            "徐州",
            "青岛",
            "宁波",
            "镇江",
            "成都",
            "长沙",
            "云浮",
            "back",
        ],
    ),
];

/// Short or fused spellings rewritten before the exact city lookup
///
/// Only the first case-sensitive occurrence of each alias is rewritten.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("Paulo", "Sao Paulo"),
    ("Petersburg", "Saint Petersburg"),
    ("SiliconValley", "Silicon Valley"),
    ("LasVegas", "Las Vegas"),
    ("LosAngeles", "Los Angeles"),
    ("SanJose", "San Jose"),
    ("SantaClara", "Santa Clara"),
    ("弗里蒙特", "Fremont"),
    ("圣荷西", "San Jose"),
];

/// Foreign cities for the exact location stage
pub const CITIES: &[City] = &[
    City::new("Vienna", "维也纳"),
    City::new("Sydney", "悉尼"),
    City::new("Montreal", "蒙特利尔"),
    City::new("Vancouver", "温哥华"),
    City::new("Zurich", "苏黎世"),
    City::new("Frankfurt", "法兰克福"),
    City::new("Helsinki", "赫尔辛基"),
    City::new("Paris", "巴黎"),
    City::new("London", "伦敦"),
    City::new("Jakarta", "雅加达"),
    City::new("Dublin", "都柏林"),
    City::new("Mumbai", "孟买"),
    City::new("Milan", "米兰"),
    City::new("Tokyo", "东京"),
    City::new("Osaka", "大阪"),
    City::new("Saitama", "埼玉"),
    City::new("Seoul", "首尔"),
    City::new("Amsterdam", "阿姆斯特丹"),
    City::new("Moscow", "莫斯科"),
    City::new("Saint Petersburg", "圣彼得堡"),
    City::new("Siberia", "西伯利亚"),
    City::new("Bangkok", "曼谷"),
    City::new("Istanbul", "伊斯坦布尔"),
    City::new("Portland", "波特兰"),
    City::new("Dallas", "达拉斯"),
    City::new("Oregon", "俄勒冈"),
    City::new("Phoenix", "凤凰城"),
    City::new("Fremont", "费利蒙"),
    City::new("Silicon Valley", "硅谷"),
    City::new("Las Vegas", "拉斯维加斯"),
    City::new("Los Angeles", "洛杉矶"),
    City::new("San Jose", "圣何塞"),
    City::new("Santa Clara", "圣克拉拉"),
    City::new("Seattle", "西雅图"),
    City::new("Chicago", "芝加哥"),
    City::new("Sao Paulo", "圣保罗"),
];

/// Network feature tags, matched against remark or hostname
pub const NETWORK_TAGS: &[KeywordRule] = &[
    KeywordRule::new("BGP", &["BGP"]),
    KeywordRule::new("IPLC", &["IPLC"]),
    KeywordRule::new("IEPL", &["IEPL"]),
    KeywordRule::new("CEN", &["CEN"]),
    KeywordRule::new("AIA", &["AIA"]),
    KeywordRule::new("AGA", &["AGA"]),
    KeywordRule::new("Game", &["Game", "Gaming", "游戏"]),
];

/// Streaming unlock tag, matched against the remark only
pub const UNLOCK_TAG: KeywordRule = KeywordRule::new(
    "Unlocked",
    &["Stream", "Media", "Netflix", "Unlock", "流", "媒体", "奈飞", "解锁"],
);
