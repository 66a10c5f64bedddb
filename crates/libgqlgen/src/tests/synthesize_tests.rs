use super::build_catalog;
use crate::SelectionSynthesizer;
use crate::pascal_case;

mod scalar_roots {
    use super::*;

    #[test]
    fn scalar_root_field_with_no_arguments_is_minimal() {
        let (operations, catalog) = build_catalog(
            "type Query { now: String }",
        );
        let synthesizer = SelectionSynthesizer::new(&catalog);

        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "query Now {\n",
                "  now\n",
                "}\n",
            ),
        );
    }

    #[test]
    fn custom_scalar_return_type_gets_no_subselection() {
        // DateTime is not catalogued, so it is a leaf even though it is
        // not a built-in scalar.
        let (operations, catalog) = build_catalog(concat!(
            "scalar DateTime\n",
            "type Query { startedAt: DateTime! }",
        ));
        let synthesizer = SelectionSynthesizer::new(&catalog);

        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "query StartedAt {\n",
                "  startedAt\n",
                "}\n",
            ),
        );
    }
}

mod object_roots {
    use super::*;

    #[test]
    fn leaf_vs_object_branching() {
        let (operations, catalog) = build_catalog(concat!(
            "type Query { foo: Foo }\n",
            "type Foo { id: ID!, bar: Bar }\n",
            "type Bar { baz: String }",
        ));
        let synthesizer = SelectionSynthesizer::new(&catalog);

        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "query Foo {\n",
                "  foo {\n",
                "    id\n",
                "    bar {\n",
                "      baz\n",
                "    }\n",
                "  }\n",
                "}\n",
            ),
        );
    }

    #[test]
    fn mutation_header_uses_mutation_keyword() {
        let (operations, catalog) = build_catalog(concat!(
            "type Mutation { touchUser(id: ID!): User }\n",
            "type User { id: ID }",
        ));
        let synthesizer = SelectionSynthesizer::new(&catalog);

        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "mutation TouchUser($id: ID!) {\n",
                "  touchUser(id: $id) {\n",
                "    id\n",
                "  }\n",
                "}\n",
            ),
        );
    }
}

mod arguments {
    use super::*;

    #[test]
    fn declarations_and_bindings_match_in_count_and_order() {
        let (operations, catalog) = build_catalog(concat!(
            "type Query {\n",
            "  search(term: String!, limit: Int, tags: [String!]): String\n",
            "}",
        ));
        let synthesizer = SelectionSynthesizer::new(&catalog);

        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "query Search($term: String!, $limit: Int, $tags: [String!]) {\n",
                "  search(term: $term, limit: $limit, tags: $tags)\n",
                "}\n",
            ),
        );
    }

    #[test]
    fn argument_wrapping_syntax_preserved_in_declarations() {
        let (operations, catalog) = build_catalog(concat!(
            "type Query { byIds(ids: [ID!]!): String }",
        ));
        let synthesizer = SelectionSynthesizer::new(&catalog);

        let document = synthesizer.synthesize(&operations[0]);
        assert!(document.contains("($ids: [ID!]!)"));
        assert!(document.contains("byIds(ids: $ids)"));
    }
}

mod depth_bounds {
    use super::*;

    const RECURSIVE_SDL: &str = concat!(
        "type Query { root: Node }\n",
        "type Node { id: ID, next: Node }",
    );

    #[test]
    fn self_referential_type_truncated_at_default_depth() {
        let (operations, catalog) = build_catalog(RECURSIVE_SDL);
        let synthesizer = SelectionSynthesizer::new(&catalog);

        // Depth 2 is the default: two nested object hops below the return
        // type's own selection, then `next` stands alone.
        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "query Root {\n",
                "  root {\n",
                "    id\n",
                "    next {\n",
                "      id\n",
                "      next {\n",
                "        id\n",
                "        next\n",
                "      }\n",
                "    }\n",
                "  }\n",
                "}\n",
            ),
        );
    }

    #[test]
    fn depth_zero_truncates_every_object_field() {
        let (operations, catalog) = build_catalog(RECURSIVE_SDL);
        let synthesizer = SelectionSynthesizer::with_max_depth(&catalog, 0);

        assert_eq!(
            synthesizer.synthesize(&operations[0]),
            concat!(
                "query Root {\n",
                "  root {\n",
                "    id\n",
                "    next\n",
                "  }\n",
                "}\n",
            ),
        );
    }

    #[test]
    fn no_selection_path_exceeds_the_bound() {
        let (operations, catalog) = build_catalog(RECURSIVE_SDL);
        let max_depth = 4;
        let synthesizer =
            SelectionSynthesizer::with_max_depth(&catalog, max_depth);

        let document = synthesizer.synthesize(&operations[0]);

        // Indentation tracks nesting: the root field sits at level 1, the
        // depth-0 selection at level 2, and each object hop adds one
        // level. The deepest line the bound allows is the truncated field
        // at level max_depth + 2, and no line may be deeper.
        let deepest = document.lines()
            .map(|line| {
                let indent = line.len() - line.trim_start().len();
                indent / 2
            })
            .max()
            .unwrap();
        assert_eq!(deepest, max_depth + 2);
    }
}

mod pascal_casing {
    use super::*;

    #[test]
    fn uppercases_only_the_first_character() {
        assert_eq!(pascal_case("now"), "Now");
        assert_eq!(pascal_case("touchUser"), "TouchUser");
        assert_eq!(pascal_case("fooBarBaz"), "FooBarBaz");
    }

    #[test]
    fn already_uppercase_is_unchanged() {
        assert_eq!(pascal_case("Now"), "Now");
    }

    #[test]
    fn multi_word_names_are_not_specially_handled() {
        assert_eq!(pascal_case("foo_bar"), "Foo_bar");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(pascal_case(""), "");
    }
}
