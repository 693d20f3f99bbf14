use ordena::catalog::{Catalog, Sentence};
use ordena::engine::Verdict;
use ordena::engine::scoring::Progress;
use ordena::engine::shuffle::{IdentityShuffler, RandomShuffler, ReverseShuffler, Shuffler};
use ordena::engine::verify::verify;
use ordena::session::controller::{Controller, Effect, Input, Screen};
use ordena::session::focus::FocusArea;
use ordena::session::state::{Modal, Nav, Verification};

fn sentence(id: u32, text: &str) -> Sentence {
    Sentence {
        id,
        correct_text: text.to_string(),
        words: text.split(' ').map(str::to_string).collect(),
        theme: "Escuela".to_string(),
        theme_icon: "🏫".to_string(),
    }
}

fn controller_for(texts: &[&str], progress: Progress, shuffler: impl Shuffler + 'static) -> Controller {
    let sentences = texts
        .iter()
        .enumerate()
        .map(|(i, t)| sentence(i as u32 + 1, t))
        .collect();
    Controller::new(Catalog::new(sentences).unwrap(), progress, Box::new(shuffler))
}

fn place_in_order(c: &mut Controller) {
    let words = c.session().sentence().words.clone();
    for word in &words {
        let index = c
            .session()
            .available()
            .iter()
            .position(|w| w == word)
            .unwrap();
        c.dispatch(Input::PlaceAt(index));
    }
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn scenario_a_correct_order_scores() {
    let catalog = Catalog::bundled().unwrap();
    let mut c = Controller::new(catalog, Progress::default(), Box::new(RandomShuffler::seeded(3)));
    assert_eq!(
        c.session().sentence().words,
        ["Me", "gusta", "ir", "a", "la", "escuela"]
    );
    place_in_order(&mut c);
    let effects = c.dispatch(Input::Verify);

    assert_eq!(c.session().verification(), Verification::Correct);
    assert_eq!(c.session().modal(), Modal::Feedback);
    assert_eq!(c.progress().points, 100);
    assert!(effects.contains(&Effect::Celebrate));
}

#[test]
fn scenario_b_swapped_tail_is_incorrect() {
    let mut c = controller_for(&["Me gusta ir a la escuela"], Progress::default(), IdentityShuffler);
    for _ in 0..4 {
        c.dispatch(Input::PlaceAt(0));
    }
    // available is now ["la", "escuela"]; place them swapped
    c.dispatch(Input::PlaceAt(1));
    c.dispatch(Input::PlaceAt(0));
    assert_eq!(c.session().placed(), ["Me", "gusta", "ir", "a", "escuela", "la"]);

    let effects = c.dispatch(Input::Verify);
    assert_eq!(c.session().verification(), Verification::Incorrect);
    assert_eq!(c.progress().points, 0);
    assert!(!effects.iter().any(|e| matches!(e, Effect::Progress(_))));
    assert_eq!(c.session().placed().len(), 6);
}

#[test]
fn scenario_c_first_star_at_350() {
    let mut c = controller_for(&["Hoy hace sol"], Progress::new(250, 1), ReverseShuffler);
    place_in_order(&mut c);
    c.dispatch(Input::Verify);
    let p = c.progress();
    assert_eq!((p.points, p.stars, p.trophies), (350, 1, 0));
}

#[test]
fn scenario_d_focus_clamps_after_placement() {
    let mut c = controller_for(&["Hoy hace sol"], Progress::default(), IdentityShuffler);
    c.dispatch(Input::Nav(Nav::Right));
    c.dispatch(Input::Nav(Nav::Right));
    assert_eq!(c.session().focus().index, 2);

    c.dispatch(Input::Select);
    assert_eq!(c.session().focus().area, FocusArea::Available);
    assert_eq!(c.session().focus().index, 1);

    c.dispatch(Input::Select);
    c.dispatch(Input::Select);
    assert!(c.session().available().is_empty());
    assert_eq!(c.session().focus().index, 0);
}

#[test]
fn scenario_e_hint_when_complete_is_noop() {
    let mut c = controller_for(&["Hoy hace sol"], Progress::default(), ReverseShuffler);
    for _ in 0..3 {
        c.dispatch(Input::PlaceAt(0));
    }
    let before = c.session().clone();
    assert!(c.dispatch(Input::Hint).is_empty());
    assert_eq!(c.session(), &before);
}

#[test]
fn scenario_f_reset_needs_confirmation() {
    let mut c = controller_for(&["Hoy hace sol"], Progress::default(), IdentityShuffler);
    c.dispatch(Input::PlaceAt(0));
    c.dispatch(Input::Reset);
    assert_eq!(c.session().modal(), Modal::ResetConfirm);
    assert_eq!(c.session().placed(), ["Hoy"]);

    // Escape cancels without touching the pool.
    c.dispatch(Input::Escape);
    assert_eq!(c.session().modal(), Modal::None);
    assert_eq!(c.session().placed(), ["Hoy"]);

    c.dispatch(Input::Reset);
    c.dispatch(Input::Confirm);
    assert!(c.session().placed().is_empty());
    assert_eq!(
        sorted(c.session().available().to_vec()),
        sorted(c.session().sentence().words.clone())
    );
}

#[test]
fn partition_and_focus_hold_under_mixed_input() {
    let text = "Yo veo la luna y la estrella";
    let mut c = controller_for(&[text], Progress::default(), RandomShuffler::seeded(42));
    let expected = sorted(c.session().sentence().words.clone());
    let script = [
        Input::Select,
        Input::Nav(Nav::Right),
        Input::Nav(Nav::Right),
        Input::Select,
        Input::Hint,
        Input::Nav(Nav::Up),
        Input::Nav(Nav::Right),
        Input::Remove,
        Input::PlaceAt(9),
        Input::UnplaceAt(0),
        Input::Reset,
        Input::Confirm,
        Input::Hint,
        Input::Hint,
        Input::Nav(Nav::Down),
        Input::Nav(Nav::Right),
        Input::Select,
        Input::Nav(Nav::Up),
        Input::Select,
        Input::Escape,
    ];
    for input in script {
        c.dispatch(input);
        let s = c.session();
        let mut all: Vec<String> = s.available().iter().chain(s.placed()).cloned().collect();
        all.sort();
        assert_eq!(all, expected, "after {input:?}");

        let active = match s.focus().area {
            FocusArea::Available => s.available().len(),
            FocusArea::Placed => s.placed().len(),
        };
        if active == 0 {
            assert_eq!(s.focus().index, 0);
        } else {
            assert!(s.focus().index < active, "after {input:?}");
        }
    }
}

#[test]
fn swapping_two_distinct_tokens_is_incorrect() {
    let s = sentence(1, "Mi abuela cocina sopa rica");
    for i in 0..s.words.len() {
        for j in (i + 1)..s.words.len() {
            let mut placed = s.words.clone();
            placed.swap(i, j);
            assert_eq!(verify(&placed, &s), Verdict::Incorrect);
        }
    }
    assert_eq!(verify(&s.words, &s), Verdict::Correct);
}

#[test]
fn full_run_advances_and_wraps_levels() {
    let mut c = controller_for(&["Hoy hace sol", "El gato duerme mucho"], Progress::default(), RandomShuffler::seeded(1));
    for expected_id in [1, 2, 1] {
        assert_eq!(c.session().sentence().id, expected_id);
        place_in_order(&mut c);
        c.dispatch(Input::Verify);
        let effects = c.dispatch(Input::Confirm);
        assert!(effects.iter().any(|e| matches!(e, Effect::Speak(t) if t.starts_with("Nivel"))));
    }
    assert_eq!(c.progress().current_level, 4);
    assert_eq!(c.progress().points, 300);
    assert_eq!(c.progress().stars, 1);
    assert_eq!(
        c.dispatch(Input::Exit(Screen::Rewards)),
        vec![Effect::Navigate(Screen::Rewards)]
    );
}
