mod search_depth_properties_contract;
