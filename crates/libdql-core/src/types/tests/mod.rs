mod dql_type_tests;
