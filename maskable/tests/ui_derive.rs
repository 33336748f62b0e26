mod derive {
    #[test]
    fn accepts_named_struct() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_named_struct_ok.rs");
    }

    #[test]
    fn accepts_enums() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_enum_ok.rs");
    }

    #[test]
    fn accepts_generic_parameters() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_generics_ok.rs");
    }

    #[test]
    fn accepts_unit_structs_and_raw_identifiers() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_unit_and_raw_ok.rs");
    }
}
