use std::collections::HashMap;
use std::sync::LazyLock;

/// The 66 books in traditional order. Used for presentation only.
pub const CANONICAL_ORDER: [&str; 66] = [
    "創世記", "出埃及記", "利未記", "民數記", "申命記", "約書亞記", "士師記", "路得記",
    "撒母耳記上", "撒母耳記下", "列王紀上", "列王紀下", "歷代志上", "歷代志下", "以斯拉記",
    "尼希米記", "以斯帖記", "約伯記", "詩篇", "箴言", "傳道書", "雅歌", "以賽亞書", "耶利米書",
    "耶利米哀歌", "以西結書", "但以理書", "何西阿書", "約珥書", "阿摩司書", "俄巴底亞書",
    "約拿書", "彌迦書", "那鴻書", "哈巴谷書", "西番雅書", "哈該書", "撒迦利亞書", "瑪拉基書",
    "馬太福音", "馬可福音", "路加福音", "約翰福音", "使徒行傳", "羅馬書", "哥林多前書",
    "哥林多後書", "加拉太書", "以弗所書", "腓立比書", "歌羅西書", "帖撒羅尼迦前書",
    "帖撒羅尼迦後書", "提摩太前書", "提摩太後書", "提多書", "腓利門書", "希伯來書", "雅各書",
    "彼得前書", "彼得後書", "約翰一書", "約翰二書", "約翰三書", "猶大書", "啟示錄",
];

pub const CHINESE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("創", "創世記"), ("出", "出埃及記"), ("利", "利未記"), ("民", "民數記"), ("申", "申命記"),
    ("書", "約書亞記"), ("士", "士師記"), ("得", "路得記"),
    ("撒上", "撒母耳記上"), ("撒下", "撒母耳記下"),
    ("王上", "列王紀上"), ("王下", "列王紀下"),
    ("歷上", "歷代志上"), ("歷下", "歷代志下"),
    ("拉", "以斯拉記"), ("尼", "尼希米記"), ("斯", "以斯帖記"),
    ("伯", "約伯記"), ("詩", "詩篇"), ("箴", "箴言"), ("傳", "傳道書"), ("歌", "雅歌"),
    ("賽", "以賽亞書"), ("耶", "耶利米書"), ("哀", "耶利米哀歌"),
    ("結", "以西結書"), ("但", "但以理書"), ("何", "何西阿書"), ("珥", "約珥書"),
    ("摩", "阿摩司書"), ("俄", "俄巴底亞書"), ("拿", "約拿書"), ("彌", "彌迦書"),
    ("鴻", "那鴻書"), ("哈", "哈巴谷書"), ("番", "西番雅書"), ("該", "哈該書"),
    ("亞", "撒迦利亞書"), ("瑪", "瑪拉基書"),
    ("太", "馬太福音"), ("可", "馬可福音"), ("路", "路加福音"), ("約", "約翰福音"),
    ("徒", "使徒行傳"), ("羅", "羅馬書"), ("林前", "哥林多前書"), ("林後", "哥林多後書"),
    ("加", "加拉太書"), ("弗", "以弗所書"), ("腓", "腓立比書"), ("西", "歌羅西書"),
    ("帖前", "帖撒羅尼迦前書"), ("帖後", "帖撒羅尼迦後書"),
    ("提前", "提摩太前書"), ("提後", "提摩太後書"),
    ("多", "提多書"), ("門", "腓利門書"), ("來", "希伯來書"), ("雅", "雅各書"),
    ("彼前", "彼得前書"), ("彼後", "彼得後書"),
    ("約一", "約翰一書"), ("約二", "約翰二書"), ("約三", "約翰三書"),
    ("猶", "猶大書"), ("啟", "啟示錄"),
];

pub const LATIN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Gen", "創世記"), ("Exo", "出埃及記"), ("Lev", "利未記"), ("Num", "民數記"), ("Deu", "申命記"),
    ("Jos", "約書亞記"), ("Jdg", "士師記"), ("Rut", "路得記"), ("1Sa", "撒母耳記上"), ("2Sa", "撒母耳記下"),
    ("1Ki", "列王紀上"), ("2Ki", "列王紀下"), ("1Ch", "歷代志上"), ("2Ch", "歷代志下"), ("Ezr", "以斯拉記"),
    ("Neh", "尼希米記"), ("Est", "以斯帖記"), ("Job", "約伯記"), ("Psa", "詩篇"), ("Pro", "箴言"),
    ("Ecc", "傳道書"), ("Sng", "雅歌"), ("Isa", "以賽亞書"), ("Jer", "耶利米書"), ("Lam", "耶利米哀歌"),
    ("Eze", "以西結書"), ("Dan", "但以理書"), ("Hos", "何西阿書"), ("Joe", "約珥書"), ("Amo", "阿摩司書"),
    ("Oba", "俄巴底亞書"), ("Jon", "約拿書"), ("Mic", "彌迦書"), ("Nah", "那鴻書"), ("Hab", "哈巴谷書"),
    ("Zep", "西番雅書"), ("Hag", "哈該書"), ("Zec", "撒迦利亞書"), ("Mal", "瑪拉基書"),
    ("Mat", "馬太福音"), ("Mar", "馬可福音"), ("Luk", "路加福音"), ("Joh", "約翰福音"),
    ("Act", "使徒行傳"), ("Rom", "羅馬書"), ("1Co", "哥林多前書"), ("2Co", "哥林多後書"),
    ("Gal", "加拉太書"), ("Eph", "以弗所書"), ("Phi", "腓立比書"), ("Col", "歌羅西書"),
    ("1Th", "帖撒羅尼迦前書"), ("2Th", "帖撒羅尼迦後書"), ("1Ti", "提摩太前書"), ("2Ti", "提摩太後書"),
    ("Tit", "提多書"), ("Phm", "腓利門書"), ("Heb", "希伯來書"), ("Jas", "雅各書"),
    ("1Pe", "彼得前書"), ("2Pe", "彼得後書"), ("1Jo", "約翰一書"), ("2Jo", "約翰二書"), ("3Jo", "約翰三書"),
    ("Jud", "猶大書"), ("Rev", "啟示錄"),
];

/// Chinese table sorted longest key first, so "歷下" is tried before "歷".
pub static CHINESE_BY_LENGTH: LazyLock<Vec<(&'static str, &'static str)>> =
    LazyLock::new(|| longest_first(CHINESE_ABBREVIATIONS));

/// Latin table under the same rule. All codes are three characters today,
/// so this keeps table order.
pub static LATIN_BY_LENGTH: LazyLock<Vec<(&'static str, &'static str)>> =
    LazyLock::new(|| longest_first(LATIN_ABBREVIATIONS));

static CANONICAL_RANK: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    CANONICAL_ORDER
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect()
});

fn longest_first(table: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    let mut entries = table.to_vec();
    // Stable sort: ties keep table order.
    entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    entries
}

/// Position of `name` in the canonical order, if it is a canonical book.
pub fn canonical_rank(name: &str) -> Option<usize> {
    CANONICAL_RANK.get(name).copied()
}

/// Length in chars of the longest prefix `text` shares with any canonical
/// book name.
pub fn canonical_overlap(text: &str) -> usize {
    CANONICAL_ORDER
        .iter()
        .map(|name| {
            name.chars()
                .zip(text.chars())
                .take_while(|(a, b)| a == b)
                .count()
        })
        .max()
        .unwrap_or(0)
}

/// Sort book names into canonical order. Unknown names go last and keep
/// their relative order.
pub fn sort_canonical(names: &mut [String]) {
    names.sort_by_key(|name| canonical_rank(name).unwrap_or(usize::MAX));
}
