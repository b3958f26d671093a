use std::cmp::Ordering;
use std::collections::BTreeMap;

/// вхождение кандидата в список одного из источников
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a>
{
    pub ids: &'a str,
    /// номер источника
    pub source: usize,
    /// место в списке источника, с нуля
    pub position: usize,
}

/// кандидат со всеми своими вхождениями
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate<'a>
{
    pub ids: &'a str,
    /// количество символов
    pub length: usize,
    /// пары (источник, место) в порядке обхода источников
    pub occurrences: Vec<(usize, usize)>,
}

impl<'a> RankedCandidate<'a>
{
    /// самое высокое место среди всех источников
    pub fn min_position(&self) -> usize
    {
        self.occurrences.iter().map(|&(_, position)| position).min().unwrap_or(0)
    }

    pub fn position_sum(&self) -> usize
    {
        self.occurrences.iter().map(|&(_, position)| position).sum()
    }

    pub fn occurrence_count(&self) -> usize
    {
        self.occurrences.len()
    }

    /// первое вхождение: самый ранний источник, в нём - самое высокое место
    pub fn first_seen(&self) -> (usize, usize)
    {
        self.occurrences.first().copied().unwrap_or((usize::MAX, usize::MAX))
    }

    pub fn mean_position(&self) -> f64
    {
        match self.occurrences.is_empty() {
            true => 0.0,
            false => self.position_sum() as f64 / self.occurrence_count() as f64,
        }
    }

    /// порядок кандидатов: короче, выше в каком-либо источнике, выше в среднем, чаще встречается.
    /// при полном совпадении выше тот, кто встретился раньше: источники идут в порядке конфигурации
    pub fn cmp_rank(&self, other: &Self) -> Ordering
    {
        self.length
            .cmp(&other.length)
            .then_with(|| self.min_position().cmp(&other.min_position()))
            .then_with(|| {
                // средние сравниваем без деления: a / n < b / m <=> a * m < b * n
                let left = self.position_sum() * other.occurrence_count();
                let right = other.position_sum() * self.occurrence_count();

                left.cmp(&right)
            })
            .then_with(|| other.occurrence_count().cmp(&self.occurrence_count()))
            .then_with(|| self.first_seen().cmp(&other.first_seen()))
    }
}

/// итог выбора для одного символа
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection
{
    /// каноническая IDS, пустая строка - если кандидатов нет
    pub ids: String,
    /// остальные кандидаты по убыванию предпочтения
    pub more: Vec<String>,
}

/// все вхождения кандидатов по спискам источников
pub fn occurrences<'a>(lists: &[&'a [String]]) -> Vec<Occurrence<'a>>
{
    lists
        .iter()
        .enumerate()
        .flat_map(|(source, list)| {
            list.iter().enumerate().map(move |(position, ids)| Occurrence {
                ids: ids.as_str(),
                source,
                position,
            })
        })
        .collect()
}

/// объединение кандидатов всех источников, отсортированное по предпочтению
pub fn candidate_ranking<'a>(lists: &[&'a [String]]) -> Vec<RankedCandidate<'a>>
{
    let mut grouped: BTreeMap<&str, RankedCandidate> = BTreeMap::new();

    for occurrence in occurrences(lists) {
        grouped
            .entry(occurrence.ids)
            .or_insert_with(|| RankedCandidate {
                ids: occurrence.ids,
                length: occurrence.ids.chars().count(),
                occurrences: vec![],
            })
            .occurrences
            .push((occurrence.source, occurrence.position));
    }

    let mut ranking: Vec<RankedCandidate> = grouped.into_values().collect();
    ranking.sort_by(RankedCandidate::cmp_rank);

    ranking
}

/// первый кандидат - каноническая IDS, остальные - альтернативы
pub fn select(lists: &[&[String]]) -> Selection
{
    let mut ranking = candidate_ranking(lists).into_iter().map(|c| c.ids.to_owned());

    Selection {
        ids: ranking.next().unwrap_or_default(),
        more: ranking.collect(),
    }
}
