mod quality_test;
