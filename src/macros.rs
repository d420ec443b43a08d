// Macros to simplify rule set declarations

#[macro_export]
macro_rules! rules {
    () => {
        $crate::rewriting::rule::RuleSet::default()
    };
    ($($spec:tt)+) => {{
        let mut set = $crate::rewriting::rule::RuleSet::default();
        $crate::rules_into!(set; $($spec)+);
        set
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! rules_into {
    ($set:ident; ) => {};
    ($set:ident; $find:tt <=> $replace:tt $(, $($rest:tt)*)? ) => {
        $set.push($crate::rewriting::rule::Rule::new($find, $replace));
        $set.push($crate::rewriting::rule::Rule::new($replace, $find));
        $( $crate::rules_into!($set; $($rest)*); )?
    };
    ($set:ident; $find:expr => $replace:expr $(, $($rest:tt)*)? ) => {
        $set.push($crate::rewriting::rule::Rule::new($find, $replace));
        $( $crate::rules_into!($set; $($rest)*); )?
    };
}

#[cfg(test)]
mod tests {
    use crate::rewriting::rule::Rule;

    #[test]
    fn builds_rule_sets_in_declaration_order() {
        let rules = crate::rules!["AA" => "B", "0" <=> "1"];
        assert_eq!(rules.rules(), &[
            Rule::new("AA", "B"),
            Rule::new("0", "1"),
            Rule::new("1", "0"),
        ]);
    }

    #[test]
    fn deduplicates_like_spec_parsing() {
        let rules = crate::rules!["A" => "B", "A" => "B", "B" <=> "A"];
        assert_eq!(rules.rules(), &[Rule::new("A", "B"), Rule::new("B", "A")]);
    }

    #[test]
    fn empty_invocation_is_an_empty_set() {
        assert!(crate::rules![].is_empty());
    }
}
