use core::ops::RangeInclusive;

/// блок кодпоинтов: именованный диапазон с описанием и исключениями
#[derive(Debug, Clone)]
pub struct CodepointBlock
{
    /// ключ, по которому блок выбирается в конфигурации
    pub key: &'static str,
    /// английское название
    pub name_en: &'static str,
    /// китайское название
    pub name_zh: &'static str,
    /// заявленное количество символов (для областей частного использования не указывается)
    pub declared: Option<usize>,
    /// первый и последний кодпоинты блока (включительно)
    pub range: RangeInclusive<u32>,
    /// пустые кодпоинты внутри диапазона
    pub excluded: &'static [u32],
}

impl CodepointBlock
{
    /// количество кодпоинтов блока без учета исключений
    pub fn len(&self) -> usize
    {
        let total = (self.range.end() - self.range.start() + 1) as usize;

        total - self.excluded.iter().filter(|c| self.range.contains(*c)).count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// кодпоинты блока по возрастанию, без исключений
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_
    {
        self.range.clone().filter(|code| !self.excluded.contains(code))
    }

    /// непрерывные отрезки блока, на которые его разбивают исключения
    pub fn segments(&self) -> Vec<RangeInclusive<u32>>
    {
        let mut excluded: Vec<u32> = self
            .excluded
            .iter()
            .copied()
            .filter(|c| self.range.contains(c))
            .collect();
        excluded.sort_unstable();

        let mut segments = vec![];
        let mut start = *self.range.start();

        for code in excluded {
            if code > start {
                segments.push(start ..= code - 1);
            }
            start = code + 1;
        }

        if start <= *self.range.end() {
            segments.push(start ..= *self.range.end());
        }

        segments
    }
}

macro_rules! block {
    ($key: expr, $en: expr, $zh: expr, $count: expr, $first: expr, $last: expr) => {
        block!($key, $en, $zh, $count, $first, $last, &[])
    };
    ($key: expr, $en: expr, $zh: expr, $count: expr, $first: expr, $last: expr, $excluded: expr) => {
        CodepointBlock {
            key: $key,
            name_en: $en,
            name_zh: $zh,
            declared: $count,
            range: $first ..= $last,
            excluded: $excluded,
        }
    };
}

/// все известные блоки. в декомпозициях встречаются символы не только из унифицированных иероглифов,
/// поэтому здесь перечислены и ключи, и черты, и области частного использования
pub static BLOCKS: [CodepointBlock; 24] = [
    // Unihan
    block!("cjk-basic", "CJK Unified Ideographs", "基本汉字", Some(20902), 0x4E00, 0x9FA5),
    block!("cjk-basic2", "CJK Unified Ideographs Supplement", "基本汉字补充", Some(90), 0x9FA6, 0x9FFF),
    block!("cjk-ext-a", "CJK Unified Ideographs Extension A", "扩展A", Some(6592), 0x3400, 0x4DBF),
    block!("cjk-ext-b", "CJK Unified Ideographs Extension B", "扩展B", Some(42720), 0x20000, 0x2A6DF),
    block!("cjk-ext-c", "CJK Unified Ideographs Extension C", "扩展C", Some(4154), 0x2A700, 0x2B739),
    block!("cjk-ext-d", "CJK Unified Ideographs Extension D", "扩展D", Some(222), 0x2B740, 0x2B81D),
    block!("cjk-ext-e", "CJK Unified Ideographs Extension E", "扩展E", Some(5762), 0x2B820, 0x2CEA1),
    block!("cjk-ext-f", "CJK Unified Ideographs Extension F", "扩展F", Some(7473), 0x2CEB0, 0x2EBE0),
    block!("cjk-ext-g", "CJK Unified Ideographs Extension G", "扩展G", Some(4939), 0x30000, 0x3134A),
    block!("cjk-ext-h", "CJK Unified Ideographs Extension H", "扩展H", Some(4192), 0x31350, 0x323AF),
    block!("cjk-ext-i", "CJK Unified Ideographs Extension I", "扩展I", Some(622), 0x2EBF0, 0x2EE5D),
    // совместимые иероглифы (U+FA6E, U+FA6F не назначены)
    block!("cjk-ci", "CJK Compatibility Ideographs", "兼容汉字", Some(472), 0xF900, 0xFAD9, &[0xFA6E, 0xFA6F]),
    block!("cjk-cis", "CJK Compatibility Ideographs Supplement", "兼容扩展", Some(542), 0x2F800, 0x2FA1D),
    // не входят в Unihan
    block!("cjk-ling", "Number Zero", "〇", Some(1), 0x3007, 0x3007),
    block!("cjk-more-kx", "Kangxi Radicals", "康熙部首", Some(214), 0x2F00, 0x2FD5),
    block!("cjk-more-radical", "CJK Radicals Supplement", "部首扩展", Some(115), 0x2E80, 0x2EF3, &[0x2E9A]),
    block!("cjk-more-stroke", "CJK Strokes", "汉字笔画", Some(36), 0x31C0, 0x31E3),
    block!("cjk-more-desc", "Ideographic Description Characters", "汉字结构", Some(16), 0x2FF0, 0x2FFF),
    block!("cjk-more-bpmf", "Bopomofo", "汉语注音", Some(43), 0x3105, 0x312F),
    block!("cjk-more-bpmf-ext", "Extended Bopomofo", "注音扩展", Some(32), 0x31A0, 0x31BF),
    // области частного использования
    block!("pua1a", "Private Use Area", "", None, 0xE000, 0xF8FF),
    block!("pua1b", "High Private Use Area", "", None, 0xDB80, 0xDBFF),
    block!("pua2a", "Supplementary Private Use Area-A", "", None, 0xF0000, 0xFFFFF),
    block!("pua2b", "Supplementary Private Use Area-B", "", None, 0x100000, 0x10FFFF),
];

/// блоки, символы которых получают IDS, в порядке вывода
pub const UNIVERSE_KEYS: [&str; 12] = [
    "cjk-ling",
    "cjk-basic",
    "cjk-basic2",
    "cjk-ext-a",
    "cjk-ext-b",
    "cjk-ext-c",
    "cjk-ext-d",
    "cjk-ext-e",
    "cjk-ext-f",
    "cjk-ext-g",
    "cjk-ext-h",
    "cjk-ext-i",
];

/// найти блок по ключу
pub fn block(key: &str) -> Option<&'static CodepointBlock>
{
    BLOCKS.iter().find(|b| b.key == key)
}
