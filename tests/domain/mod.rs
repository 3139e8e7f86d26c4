mod risky_term_test;
