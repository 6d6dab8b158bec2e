mod mock_planner;
