// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 平台与类别的域名规则表
//!
//! 顺序即优先级：分类时按声明顺序匹配，首个命中的规则生效。
//! 新增域名只需在此处追加条目。

/// 平台标签 → 域名正则
pub const PLATFORM_PATTERNS: &[(&str, &str)] = &[
    ("Allibaba", r"alibaba\.com"),
    ("Amazon", r"amazon\.com"),
    ("BBC", r"(bbc\.com/news|bbc\.com)"),
    ("Cambridge", r"cambridge\.org"),
    ("Ebay", r"ebay\.com"),
    ("Elblearning", r"elblearning\.com"),
    ("Etsy", r"etsy\.com"),
    ("Facebook", r"facebook\.com"),
    ("How it Works", r"howstuffworks\.com"),
    ("Huff Post", r"huffpost\.com"),
    ("India Mart", r"dir\.indiamart\.com"),
    ("Instagram", r"instagram\.com"),
    ("Linkedin", r"linkedin\.com"),
    ("Marvel Fandom", r"marvel\.fandom\.com"),
    ("NGC", r"nationalgeographic\.com"),
    ("Ngpf", r"ngpf\.org"),
    ("Quora", r"quora\.com"),
    ("Reddit", r"reddit\.com"),
    ("Twitter", r"twitter\.com"),
    ("Xbox", r"marketplace\.xbox\.com"),
    ("Walmart", r"walmart\.com"),
    ("Wikipedia", r"wikipedia\.org"),
    ("Youtube", r"(youtube\.com|youtu\.be)"),
    ("Coursera", r"coursera\.org"),
    ("Khanacademy", r"khanacademy\.org"),
    ("Edx", r"edx\.org"),
    ("Udemy", r"udemy\.com"),
    ("Codecademy", r"codecademy\.com"),
    ("Netflix", r"netflix\.com"),
    ("Imdb", r"imdb\.com"),
    ("Spotify", r"spotify\.com"),
    ("Apple", r"apple\.com"),
    ("Google", r"google\.com"),
    ("Microsoft", r"microsoft\.com"),
    ("Tesla", r"tesla\.com"),
    ("Govt : USA", r"usa\.gov"),
    ("Govt : UK", r"gov\.uk"),
    ("Govt : Australia", r"australia\.gov\.au"),
    ("Govt : Canada", r"canada\.ca"),
    ("Govt : India", r"india\.gov\.in"),
    ("Twitch", r"twitch\.tv"),
    ("Flipkart", r"flipkart\.com"),
];

/// 类别标签 → 域名正则列表
pub const CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Business",
        &[r"apple\.com", r"google\.com", r"microsoft\.com", r"tesla\.com"],
    ),
    ("Community", &[r"quora\.com", r"reddit\.com"]),
    (
        "Educational",
        &[
            r"cambridge\.org",
            r"elblearning\.com",
            r"codecademy\.com",
            r"udemy\.com",
            r"edx\.org",
            r"khanacademy\.org",
            r"coursera\.org",
        ],
    ),
    (
        "E-Commerce",
        &[
            r"alibaba\.com",
            r"amazon\.com",
            r"ebay\.com",
            r"etsy\.com",
            r"dir\.indiamart\.com",
            r"walmart\.com",
            r"flipkart\.com",
        ],
    ),
    ("Finance", &[r"ngpf\.org"]),
    ("Films", &[r"marvel\.fandom\.com", r"imdb\.com"]),
    ("Games", &[r"marketplace\.xbox\.com"]),
    (
        "Government",
        &[
            r"australia\.gov\.au",
            r"canada\.ca",
            r"india\.gov\.in",
            r"gov\.uk",
            r"usa\.gov",
        ],
    ),
    (
        "Informational",
        &[
            r"bbc\.com",
            r"howstuffworks\.com",
            r"huffpost\.com",
            r"nationalgeographic\.com",
            r"wikipedia\.org",
        ],
    ),
    ("Marketing", &[r"dir\.indiamart\.com"]),
    (
        "Social Media",
        &[
            r"youtube\.com|youtu\.be",
            r"twitter\.com",
            r"facebook\.com",
            r"instagram\.com",
            r"linkedin\.com",
            r"twitch\.tv",
        ],
    ),
    ("Streaming", &[r"netflix\.com", r"spotify\.com"]),
];
