use varna::{
    AllStems, Detail, Elision, Engine, EngineConfig, Gender, Options, PhonemeTables, Process, RootCandidacy, Script,
    ScriptDetection, ShorteningContext, SubstitutionContext, UpadhaContext,
};

#[test]
fn neuter_devanagari_shortening() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables).with_classifier(AllStems);
    let ctx = ShorteningContext::builder()
        .script(Script::Devanagari)
        .gender(Gender::Neuter)
        .build()
        .unwrap();

    let result = engine.shorten("देवा", &ctx, Options::commit());
    assert!(result.applies);
    assert!(result.changed);
    assert_eq!(result.transformed.as_deref(), Some("देव"));

    match result.detail {
        Some(Detail::Shortening {
            position,
            final_vowel_original,
            final_vowel_shortened,
        }) => {
            assert_eq!(position, 3);
            assert_eq!(final_vowel_original, "आ");
            assert_eq!(final_vowel_shortened, "अ");
        }
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn rapara_scenarios() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables);
    assert_eq!(engine.apply_rapara("u", "ṝ", Script::Iast).unwrap(), "ur");
    assert_eq!(engine.apply_rapara("o", "ṛ", Script::Iast).unwrap(), "o");
}

#[test]
fn upadha_of_kr() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables);

    let analysis = engine.analyze_upadha("kṛ", &UpadhaContext::new());
    assert!(analysis.applies);
    assert!(analysis.has_ik_upadha);
    assert_eq!(analysis.candidacy, RootCandidacy::Heuristic);
    assert_eq!(analysis.upadha.as_deref(), Some("ṛ"));
    assert_eq!(analysis.guna_form.as_deref(), Some("ar"));
    assert_eq!(analysis.vriddhi_form.as_deref(), Some("ār"));

    let analysis = engine.analyze_upadha("kṛ", &UpadhaContext::new().dhatu(false));
    assert!(!analysis.applies);
    assert_eq!(analysis.candidacy, RootCandidacy::Rejected);
}

#[test]
fn upadha_heuristic_follows_config() {
    let tables = PhonemeTables::new();
    let config = EngineConfig::from_json(r#"{ "root_candidate_max_len": 3 }"#).unwrap();
    let engine = Engine::with_config(&tables, config).unwrap();

    assert!(engine.analyze_upadha("bhid", &UpadhaContext::new()).applies);
    assert!(!engine.analyze_upadha("bhinad", &UpadhaContext::new()).applies);
    assert!(engine.analyze_upadha("bhinad", &UpadhaContext::new().dhatu(true)).applies);
}

#[test]
fn luk_preview_on_devanagari() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables);
    let ctx = ShorteningContext::builder().elision(Elision::Luk).build().unwrap();

    let preview = engine.shorten("देवी", &ctx, Options::preview());
    assert!(preview.applies);
    assert!(!preview.changed);

    let commit = engine.shorten("देवी", &ctx, Options::commit());
    assert_eq!(commit.transformed.as_deref(), Some("देवि"));
}

#[test]
fn contexts_parse_from_names() {
    let elision: Elision = "LUK".parse().unwrap();
    assert_eq!(elision, Elision::Luk);
    assert!("nope".parse::<Process>().is_err());
}

#[test]
fn results_keep_the_input_script() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables).with_classifier(AllStems);
    let neuter = ShorteningContext::builder().gender(Gender::Neuter).build().unwrap();
    let declension = SubstitutionContext::new(Process::Declension);

    for word in ["देवा", "वारी", "rājā", "nadī"] {
        let script = engine.resolve_script(word, None).unwrap();
        let result = engine.shorten(word, &neuter, Options::commit());
        let out = result.transformed.unwrap();
        assert_eq!(engine.detect_script(&out), ScriptDetection::Detected(script));
    }

    for word in ["पितृ", "हरि", "pitṛ", "guru"] {
        let script = engine.resolve_script(word, None).unwrap();
        let result = engine.substitute(word, None, &declension, Options::commit());
        let out = result.transformed.unwrap();
        assert_eq!(engine.detect_script(&out), ScriptDetection::Detected(script));
    }
}

#[test]
fn transliteration_round_trips() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables);

    for word in ["rāmasya", "kṛṣṇa", "vāk", "devī", "gauḥ", "saṃskṛta", "kaï", "vaü"] {
        let deva = engine.transliterate(word, Script::Devanagari).unwrap();
        assert_eq!(engine.transliterate(&deva, Script::Iast).unwrap(), word);
    }
}

#[test]
fn decomposed_input_is_normalized() {
    let tables = PhonemeTables::new();
    let engine = Engine::new(&tables);
    let decomposed = "ra\u{0304}ma";

    let word = engine.segment(decomposed, None).unwrap();
    assert_eq!(word.as_str(), "rāma");
    assert_eq!(word.len(), 4);
}

#[cfg(feature = "logging")]
#[test]
fn logging_can_be_enabled_twice() {
    varna::enable_logging();
    varna::enable_logging();
}
