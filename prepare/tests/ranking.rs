use cjk_ids_prepare::ranking::{candidate_ranking, occurrences, select, Selection};
use proptest::prelude::*;

fn list(candidates: &[&str]) -> Vec<String>
{
    candidates.iter().map(|c| c.to_string()).collect()
}

#[test]
fn shared_candidate_wins()
{
    let a = list(&["⿰木木"]);
    let b = list(&["⿰木木", "⿱木木"]);

    assert_eq!(
        select(&[&a, &b]),
        Selection {
            ids: "⿰木木".to_owned(),
            more: list(&["⿱木木"]),
        }
    );
}

/// при равной длине выигрывает кандидат, раньше встречающийся в каком-либо источнике
#[test]
fn min_position_breaks_ties()
{
    let a = list(&["⿰木⿱日月", "⿱木⿰日月", "⿰日月"]);
    let b = list(&["⿱日月"]);

    let selection = select(&[&a, &b]);

    assert_eq!(selection.ids, "⿱日月");
    assert_eq!(selection.more, list(&["⿰日月", "⿰木⿱日月", "⿱木⿰日月"]));
}

/// при полном совпадении всех признаков выигрывает кандидат из более раннего источника
#[test]
fn full_tie_prefers_earlier_source()
{
    let a = list(&["⿱日月"]);
    let b = list(&["⿰日月"]);

    let selection = select(&[&a, &b]);
    assert_eq!(selection.ids, "⿱日月");
    assert_eq!(selection.more, list(&["⿰日月"]));

    assert_eq!(select(&[&b, &a]).ids, "⿰日月");
}

/// в одном источнике при полном совпадении решает место
#[test]
fn full_tie_prefers_earlier_position()
{
    let a = list(&["⿰木木", "⿱日月"]);
    let b = list(&["⿱日月", "⿰木木"]);

    let ranking = candidate_ranking(&[&a, &b]);

    assert_eq!(ranking[0].ids, "⿰木木");
    assert_eq!(ranking[0].first_seen(), (0, 0));
    assert_eq!(ranking[1].first_seen(), (0, 1));
}

/// короткий кандидат выигрывает независимо от места
#[test]
fn shorter_wins()
{
    let a = list(&["⿰木⿱日月", "⿰木林"]);
    let b = list(&["⿰木⿱日月"]);

    let selection = select(&[&a, &b]);

    assert_eq!(selection.ids, "⿰木林");
    assert_eq!(selection.more, list(&["⿰木⿱日月"]));
}

/// при равных длине и лучшем месте решает среднее место
#[test]
fn mean_position_breaks_ties()
{
    let a = list(&["⿰木木", "⿱木木"]);
    let b = list(&["⿱木木", "⿻木木", "⿳木木", "⿰木木"]);

    let ranking = candidate_ranking(&[&a, &b]);

    // ⿰木木: места 0 и 3, среднее 1.5; ⿱木木: места 1 и 0, среднее 0.5
    assert_eq!(ranking[0].ids, "⿱木木");
    assert_eq!(ranking[0].mean_position(), 0.5);
    assert_eq!(ranking[1].ids, "⿰木木");
    assert_eq!(ranking[1].mean_position(), 1.5);
}

/// при равных длине, лучшем и среднем месте - чаще встречающийся
#[test]
fn occurrence_count_breaks_ties()
{
    let a = list(&["⿱木木"]);
    let b = list(&["⿰木木"]);
    let c = list(&["⿰木木"]);

    let ranking = candidate_ranking(&[&a, &b, &c]);

    assert_eq!(ranking[0].ids, "⿰木木");
    assert_eq!(ranking[0].occurrence_count(), 2);
    assert_eq!(ranking[0].occurrences, vec![(1, 0), (2, 0)]);
    assert_eq!(ranking[1].ids, "⿱木木");
}

#[test]
fn no_candidates()
{
    let empty: Vec<String> = vec![];

    assert_eq!(select(&[]), Selection::default());
    assert_eq!(select(&[&empty, &empty, &empty, &empty]), Selection::default());
}

#[test]
fn occurrences_are_annotated()
{
    let a = list(&["⿰木木", "⿱木木"]);
    let empty: Vec<String> = vec![];
    let c = list(&["⿱木木"]);

    let found: Vec<(&str, usize, usize)> = occurrences(&[&a, &empty, &c])
        .iter()
        .map(|o| (o.ids, o.source, o.position))
        .collect();

    assert_eq!(found, vec![("⿰木木", 0, 0), ("⿱木木", 0, 1), ("⿱木木", 2, 0)]);

    // у обоих лучшее место - первое, но в среднем ⿰木木 выше
    let ranking = candidate_ranking(&[&a, &empty, &c]);
    assert_eq!(ranking[0].ids, "⿰木木");
    assert_eq!(ranking[1].ids, "⿱木木");
    assert_eq!(ranking[1].min_position(), 0);
    assert_eq!(ranking[1].position_sum(), 1);
    assert_eq!(ranking[1].occurrence_count(), 2);
    assert_eq!(ranking[1].length, 3);
}

fn candidate() -> impl Strategy<Value = String>
{
    let glyphs = prop::sample::select(vec!['⿰', '⿱', '⿻', '木', '日', '月', '林']);

    prop::collection::vec(glyphs, 2 .. 5).prop_map(|v| v.into_iter().collect())
}

fn source_lists() -> impl Strategy<Value = Vec<Vec<String>>>
{
    prop::collection::vec(prop::collection::vec(candidate(), 0 .. 6), 0 .. 5)
}

proptest! {
    /// порядок кандидатов совпадает с устойчивой сортировкой в порядке первого появления
    #[test]
    fn matches_stable_sort_by_first_appearance(lists in source_lists())
    {
        let slices: Vec<&[String]> = lists.iter().map(Vec::as_slice).collect();

        let mut seen: Vec<(&str, Vec<usize>)> = vec![];
        for list in lists.iter() {
            for (position, ids) in list.iter().enumerate() {
                match seen.iter().position(|(s, _)| *s == ids.as_str()) {
                    Some(i) => seen[i].1.push(position),
                    None => seen.push((ids.as_str(), vec![position])),
                }
            }
        }

        // устойчивая сортировка: при равенстве ключей сохраняется порядок появления
        seen.sort_by(|(a, pa), (b, pb)| {
            let key = |ids: &str, p: &Vec<usize>| {
                (ids.chars().count(), *p.iter().min().unwrap(), p.iter().sum::<usize>(), p.len())
            };
            let (la, ma, sa, na) = key(a, pa);
            let (lb, mb, sb, nb) = key(b, pb);

            la.cmp(&lb)
                .then(ma.cmp(&mb))
                .then((sa * nb).cmp(&(sb * na)))
                .then(nb.cmp(&na))
        });

        let expected: Vec<String> = seen.iter().map(|(ids, _)| ids.to_string()).collect();
        let ranked: Vec<String> = candidate_ranking(&slices).iter().map(|c| c.ids.to_owned()).collect();

        prop_assert_eq!(ranked, expected);
    }

    /// каждый кандидат попадает в результат ровно один раз
    #[test]
    fn every_candidate_selected_once(lists in source_lists())
    {
        let slices: Vec<&[String]> = lists.iter().map(Vec::as_slice).collect();
        let selection = select(&slices);

        let mut expected: Vec<&String> = lists.iter().flatten().collect();
        expected.sort();
        expected.dedup();

        let mut selected: Vec<&String> = selection.more.iter().collect();
        if !selection.ids.is_empty() {
            selected.push(&selection.ids);
        }
        selected.sort();

        prop_assert_eq!(selected, expected);
    }

    /// канонический кандидат не длиннее альтернатив
    #[test]
    fn canonical_is_shortest(lists in source_lists())
    {
        let slices: Vec<&[String]> = lists.iter().map(Vec::as_slice).collect();
        let selection = select(&slices);
        let length = selection.ids.chars().count();

        for ids in selection.more.iter() {
            prop_assert!(ids.chars().count() >= length);
        }
    }
}
