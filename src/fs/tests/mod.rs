mod ptree;
