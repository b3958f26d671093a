use std::collections::HashSet;

use crate::alphabet::Alphabet;

/// отбор кандидатов IDS:
/// - короче двух символов - декомпозиции нет;
/// - символы вне алфавита (символы других блоков, заглушки нераспознанных компонентов);
/// - нет ни одного оператора структуры - это просто последовательность символов;
///
/// дубликаты убираются последними, порядок первого появления сохраняется
pub fn clean<I, S>(candidates: I, alphabet: &Alphabet) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();

    candidates
        .into_iter()
        .map(Into::into)
        .filter(|ids| is_valid(ids, alphabet))
        .filter(|ids| seen.insert(ids.clone()))
        .collect()
}

/// проходит ли кандидат проверки
#[inline]
pub fn is_valid(ids: &str, alphabet: &Alphabet) -> bool
{
    ids.chars().count() >= 2
        && alphabet.matches_allowed_alphabet(ids)
        && alphabet.contains_structural_operator(ids)
}
