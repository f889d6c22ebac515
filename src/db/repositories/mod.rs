mod check_ins;
